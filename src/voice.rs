//! Keyword-based voice command responder.
//!
//! A command is answered by the first keyword it contains, checked in a fixed
//! priority order. Matching is case-sensitive plain substring containment, so
//! "HELLO" does not match "hello" and "jarvisish" does match "jarvis".

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Message substituted when the request body is missing or does not decode.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// Keywords and their replies, in priority order.
const KEYWORD_REPLIES: &[(&str, &str)] = &[
    ("hello", "Hello! I'm your AgenticSeek voice assistant."),
    ("jarvis", "Yes, I'm here! How can I help you?"),
    ("help", "I'm ready to assist you with voice commands!"),
];

/// Inbound voice command.
///
/// Keys match case-insensitively and a repeated key overrides the earlier one.
/// A missing or `null` message decodes as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceRequest {
    pub message: String,
    pub agent_type: Option<String>,
}

impl VoiceRequest {
    /// Decode the first JSON value of a request body, falling back to
    /// [`UNKNOWN_COMMAND`] when it is missing or malformed.
    ///
    /// Anything after the first value is ignored, and a `null` body is an
    /// empty request.
    pub fn from_body(body: &[u8]) -> Self {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<VoiceRequest>>()
            .next();

        match first {
            Some(Ok(request)) => request.unwrap_or_default(),
            Some(Err(e)) => {
                tracing::debug!(error = %e, "Undecodable voice request, using fallback message");
                Self::unknown()
            }
            None => {
                tracing::debug!("Empty voice request, using fallback message");
                Self::unknown()
            }
        }
    }

    fn unknown() -> Self {
        Self {
            message: UNKNOWN_COMMAND.to_string(),
            agent_type: None,
        }
    }
}

impl<'de> Deserialize<'de> for VoiceRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VoiceRequestVisitor)
    }
}

struct VoiceRequestVisitor;

impl<'de> Visitor<'de> for VoiceRequestVisitor {
    type Value = VoiceRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a voice command object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = VoiceRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("message") {
                // null leaves the previous value in place
                if let Some(message) = map.next_value::<Option<String>>()? {
                    request.message = message;
                }
            } else if key.eq_ignore_ascii_case("agent_type") || key == "agentType" {
                if let Some(agent_type) = map.next_value::<Option<String>>()? {
                    request.agent_type = Some(agent_type);
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(request)
    }
}

/// Reply to a voice command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceResponse {
    pub response: String,
    pub processed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<String>,
}

/// Find the highest-priority keyword contained in `message`.
pub fn match_keyword(message: &str) -> Option<(&'static str, &'static str)> {
    KEYWORD_REPLIES
        .iter()
        .copied()
        .find(|(keyword, _)| message.contains(keyword))
}

/// Compute the reply text for a message.
pub fn reply_for(message: &str) -> String {
    match match_keyword(message) {
        Some((keyword, reply)) => {
            tracing::debug!(keyword, "Voice command matched keyword");
            reply.to_string()
        }
        None => {
            tracing::debug!("Voice command matched no keyword");
            format!("I heard: {}. How can I help?", message)
        }
    }
}

/// Process a decoded voice command into its response.
pub fn process(request: VoiceRequest) -> VoiceResponse {
    let response = reply_for(&request.message);
    let echo = (!request.message.is_empty()).then_some(request.message);

    VoiceResponse {
        response,
        processed: true,
        echo,
    }
}
