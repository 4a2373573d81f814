use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const ANIMATED_PREFIX: &str = "a_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHash {
    pub animated: bool,
    data: u128,
}

impl ImageHash {
    pub fn parse(raw: &str) -> Result<ImageHash, std::num::ParseIntError> {
        let (animated, hash) = match raw.strip_prefix(ANIMATED_PREFIX) {
            Some(hash) => (true, hash),
            None => (false, raw),
        };

        let data = u128::from_str_radix(hash, 16)?;
        Ok(ImageHash { animated, data })
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.animated {
            f.write_str(ANIMATED_PREFIX)?;
        }

        write!(f, "{:032x}", self.data)
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ImageHash::parse(&raw).map_err(Error::custom)
    }
}
