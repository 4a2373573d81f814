use serde::Deserialize;

use super::{Event, Opcode};
use crate::{Error, Result};

/// A gateway frame as decoded by the gateway layer.
#[derive(Deserialize, Debug)]
pub struct Dispatch {
    #[serde(rename = "op")]
    pub opcode: Opcode,

    #[serde(rename = "s")]
    pub seq: Option<u64>,

    #[serde(rename = "t")]
    pub event_type: Option<String>,

    #[serde(rename = "d", default)]
    pub data: serde_json::Value,
}

impl Dispatch {
    /// Decodes the event carried by a dispatch frame. `None` for other
    /// opcodes and for events the cache does not track.
    pub fn into_event(self) -> Result<Option<Event>> {
        if self.opcode != Opcode::Dispatch {
            return Ok(None);
        }

        let event_type = self.event_type.ok_or(Error::MissingField("t"))?;
        Event::parse(&event_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_dispatch_ignored() {
        let frame: Dispatch = serde_json::from_str(r#"{"op":11,"d":null}"#).unwrap();
        assert_eq!(frame.opcode, Opcode::HeartbeatAck);
        assert!(frame.into_event().unwrap().is_none());
    }

    #[test]
    fn test_dispatch_without_type() {
        let frame: Dispatch = serde_json::from_str(r#"{"op":0,"s":1,"d":{}}"#).unwrap();
        assert!(matches!(frame.into_event(), Err(Error::MissingField("t"))));
    }

    #[test]
    fn test_untracked_event() {
        let frame: Dispatch =
            serde_json::from_str(r#"{"op":0,"s":2,"t":"TYPING_START","d":{"user_id":"1"}}"#)
                .unwrap();
        assert_eq!(frame.seq, Some(2));
        assert!(frame.into_event().unwrap().is_none());
    }
}
