use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Formatter;

/// The four digit tag following a legacy username. Accounts migrated to unique
/// usernames carry `0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Discriminator(pub u16);

impl Discriminator {
    pub fn is_migrated(&self) -> bool {
        self.0 == 0
    }
}

impl Serialize for Discriminator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_migrated() {
            serializer.serialize_str("0")
        } else {
            serializer.serialize_str(&format!("{:0>4}", self.0))
        }
    }
}

impl<'de> Deserialize<'de> for Discriminator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.len() > 4 {
            return Err(Error::invalid_length(raw.len(), &"at most 4 digits"));
        }

        Ok(Discriminator(raw.parse().map_err(Error::custom)?))
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        let d: Discriminator = serde_json::from_str(r#""0042""#).unwrap();
        assert_eq!(d, Discriminator(42));
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""0042""#);
        assert_eq!(d.to_string(), "0042");
    }

    #[test]
    fn test_migrated() {
        let d: Discriminator = serde_json::from_str(r#""0""#).unwrap();
        assert!(d.is_migrated());
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""0""#);
    }

    #[test]
    fn test_too_long() {
        assert!(serde_json::from_str::<Discriminator>(r#""12345""#).is_err());
    }
}
