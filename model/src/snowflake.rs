use serde::de::{self, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Milliseconds between the unix epoch and the first second of 2015.
const DISCORD_EPOCH: u64 = 1_420_070_400_000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Unix timestamp in milliseconds at which the entity was created.
    pub fn created_at_millis(&self) -> u64 {
        (self.0 >> 22) + DISCORD_EPOCH
    }

    pub fn serialize_to_int<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }

    pub fn serialize_vec_to_ints<S: Serializer>(
        vec: &[Snowflake],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(vec.len()))?;

        for snowflake in vec {
            seq.serialize_element(&snowflake.0)?;
        }

        seq.end()
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

struct SnowflakeVisitor;

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or u64")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Snowflake(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Snowflake)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map(Snowflake).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake(s.parse()?))
    }
}

impl From<u64> for Snowflake {
    fn from(x: u64) -> Self {
        Snowflake(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct VecStruct {
        #[serde(serialize_with = "Snowflake::serialize_vec_to_ints")]
        pub snowflakes: Vec<Snowflake>,
    }

    #[test]
    fn test_serialize_snowflake_vec() {
        let v = VecStruct {
            snowflakes: vec![Snowflake(1), Snowflake(2), Snowflake(3)],
        };

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"snowflakes":[1,2,3]}"#);
    }

    #[test]
    fn test_deserialize_string_or_int() {
        let from_str: Snowflake = serde_json::from_str(r#""80351110224678912""#).unwrap();
        let from_int: Snowflake = serde_json::from_str("80351110224678912").unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_str, Snowflake(80351110224678912));
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Snowflake>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<Snowflake>("-1").is_err());
        assert!(serde_json::from_str::<Snowflake>("true").is_err());
    }

    #[test]
    fn test_created_at() {
        assert_eq!(Snowflake(175928847299117063).created_at_millis(), 1462015105796);
    }
}
