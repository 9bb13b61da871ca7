//! Message encoding policy shared by the encoder and decoder paths.
//!
//! The policy only decides *whether* a payload is transformed. The transform itself is supplied
//! by each call site, which keeps transports agnostic of concrete payload types.

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{error::CodecError, transport::HostMessage};

/// Encoding mode selected by a platform profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageEncoding {
    /// Payloads cross the boundary as structured values; transforms are ignored.
    None,
    /// Payloads cross the boundary as serialized text produced by the caller's transform.
    Json,
}

impl MessageEncoding {
    /// Returns the stable profile token for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Json => "json",
        }
    }

    /// Applies the outbound policy to `message`.
    ///
    /// [`MessageEncoding::None`] returns `message` untouched without calling `encoder`.
    pub fn encode<T, F>(self, message: T, encoder: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::None => message,
            Self::Json => encoder(message),
        }
    }

    /// Applies the inbound policy to `raw`.
    ///
    /// [`MessageEncoding::None`] returns `raw` untouched without calling `decoder`.
    pub fn decode<T, F>(self, raw: T, decoder: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::None => raw,
            Self::Json => decoder(raw),
        }
    }

    /// Converts a typed outbound payload into the host's wire value.
    ///
    /// In JSON mode the result is a string holding the serialized payload; otherwise it is the
    /// structured value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] when `message` cannot be represented as JSON.
    pub fn encode_message<T>(self, message: &T) -> Result<HostMessage, CodecError>
    where
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(message).map_err(|err| CodecError::Encode(err.to_string()))?;
        Ok(self.encode(value, |value| HostMessage::String(value.to_string())))
    }

    /// Converts an inbound wire value into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] when JSON mode receives something other than valid JSON
    /// text, or when the value does not match `T`.
    pub fn decode_message<T>(self, raw: HostMessage) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        let value = match self {
            Self::None => raw,
            Self::Json => {
                let HostMessage::String(text) = raw else {
                    return Err(CodecError::Decode(format!(
                        "expected JSON text, found {}",
                        value_kind(&raw)
                    )));
                };
                serde_json::from_str(&text).map_err(|err| CodecError::Decode(err.to_string()))?
            }
        };
        serde_json::from_value(value).map_err(|err| CodecError::Decode(err.to_string()))
    }
}

fn value_kind(value: &HostMessage) -> &'static str {
    match value {
        HostMessage::Null => "null",
        HostMessage::Bool(_) => "a boolean",
        HostMessage::Number(_) => "a number",
        HostMessage::String(_) => "a string",
        HostMessage::Array(_) => "an array",
        HostMessage::Object(_) => "an object",
    }
}

impl fmt::Display for MessageEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageEncoding {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "none" => Ok(Self::None),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown message encoding `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct AskRequest {
        text: String,
        images: Vec<String>,
    }

    #[test]
    fn none_mode_is_identity_and_skips_transforms() {
        let calls = Cell::new(0);
        let message = json!({"a": 1});

        let encoded = MessageEncoding::None.encode(message.clone(), |value| {
            calls.set(calls.get() + 1);
            HostMessage::String(value.to_string())
        });
        let decoded = MessageEncoding::None.decode(encoded.clone(), |_| {
            calls.set(calls.get() + 1);
            HostMessage::Null
        });

        assert_eq!(encoded, message);
        assert_eq!(decoded, message);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn json_mode_applies_caller_transforms() {
        let encoded = MessageEncoding::Json.encode(json!({"a": 1}), |value| {
            HostMessage::String(serde_json::to_string(&value).expect("stringify"))
        });
        assert_eq!(encoded, HostMessage::String(r#"{"a":1}"#.to_string()));

        let decoded = MessageEncoding::Json.decode(encoded, |raw| match raw {
            HostMessage::String(text) => serde_json::from_str(&text).expect("parse"),
            other => other,
        });
        assert_eq!(decoded, json!({"a": 1}));
    }

    #[test]
    fn json_mode_round_trips_under_inverse_transforms() {
        let samples = [
            json!(null),
            json!("plain text"),
            json!([1, 2, {"nested": true}]),
            json!({"type": "grpc_request", "request": {"service": "ui", "method": "ready"}}),
        ];
        let stringify = |value: HostMessage| HostMessage::String(value.to_string());
        let parse = |raw: HostMessage| match raw {
            HostMessage::String(text) => serde_json::from_str(&text).expect("parse"),
            other => other,
        };

        for sample in samples {
            let encoded = MessageEncoding::Json.encode(sample.clone(), stringify);
            assert_eq!(MessageEncoding::Json.decode(encoded, parse), sample);
        }
    }

    #[test]
    fn typed_helpers_follow_the_selected_mode() {
        let request = AskRequest {
            text: "hello".to_string(),
            images: vec![],
        };

        let structured = MessageEncoding::None
            .encode_message(&request)
            .expect("encode none");
        assert_eq!(structured, json!({"text": "hello", "images": []}));
        let text = MessageEncoding::Json
            .encode_message(&request)
            .expect("encode json");
        assert_eq!(
            text,
            HostMessage::String(r#"{"images":[],"text":"hello"}"#.to_string())
        );

        let back: AskRequest = MessageEncoding::Json
            .decode_message(text)
            .expect("decode json");
        assert_eq!(back, request);
        let back: AskRequest = MessageEncoding::None
            .decode_message(structured)
            .expect("decode none");
        assert_eq!(back, request);
    }

    #[test]
    fn json_decode_rejects_structured_values() {
        let err = MessageEncoding::Json
            .decode_message::<AskRequest>(json!({"text": "hello", "images": []}))
            .expect_err("object is not JSON text");
        assert_eq!(
            err,
            CodecError::Decode("expected JSON text, found an object".to_string())
        );
    }

    #[test]
    fn tokens_parse_and_display() {
        assert_eq!("json".parse::<MessageEncoding>(), Ok(MessageEncoding::Json));
        assert_eq!("none".parse::<MessageEncoding>(), Ok(MessageEncoding::None));
        assert!("JSON".parse::<MessageEncoding>().is_err());
        assert_eq!(MessageEncoding::Json.to_string(), "json");
    }
}
