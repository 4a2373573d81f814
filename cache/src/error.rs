use model::Snowflake;

pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Store is disabled by the cache options")]
    StoreDisabled,

    #[error("Guild {0} is not cached")]
    GuildNotFound(Snowflake),

    #[error("Member is missing the user field")]
    MemberMissingUser,

    #[error("{0} is missing required field {1}")]
    MissingField(String, String),
}

impl CacheError {
    pub(crate) fn missing_field(entity: &str, field: &str) -> CacheError {
        CacheError::MissingField(entity.to_string(), field.to_string())
    }

    /// Whether the error only means the requested entity could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CacheError::GuildNotFound(_) | CacheError::MissingField(_, _)
        )
    }
}

impl<T> From<CacheError> for Result<T> {
    fn from(e: CacheError) -> Self {
        Err(e)
    }
}
