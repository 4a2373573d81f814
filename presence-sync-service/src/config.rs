use crate::Result;
use cache::Options;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Read frames from stdin when unset.
    pub input_path: Option<PathBuf>,

    #[serde(default = "enabled")]
    pub cache_users: bool,
    #[serde(default = "enabled")]
    pub cache_members: bool,
    #[serde(default = "enabled")]
    pub cache_presences: bool,

    #[cfg(feature = "metrics")]
    #[serde(default)]
    pub print_metrics: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        envy::from_env().map_err(Into::into)
    }

    pub fn cache_options(&self) -> Options {
        Options::new(
            self.cache_users,
            true,
            self.cache_members,
            self.cache_presences,
        )
    }
}

fn enabled() -> bool {
    true
}
