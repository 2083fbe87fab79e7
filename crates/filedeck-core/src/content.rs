//! Response content items.

use serde::{Deserialize, Serialize};

/// One text item in a tool response.
///
/// Responses are ordered sequences of content items; this server only ever
/// produces text, so the `type` tag is fixed to `"text"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    kind: ContentKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ContentKind {
    Text,
}

impl TextContent {
    /// Create a text content item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Text,
            text: text.into(),
        }
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
