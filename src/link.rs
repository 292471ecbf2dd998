//! File identifiers and the deep links built from them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier the lookup service assigns to a file or directory.
///
/// The service reports ids either as JSON strings or as integers; both
/// deserialize to the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFileId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for FileId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFileId::deserialize(deserializer)? {
            RawFileId::Text(text) => Self(text),
            RawFileId::Number(number) => Self(number.to_string()),
        })
    }
}

impl Serialize for FileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A `lucid://` URL that reveals a file in the desktop client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeepLink(String);

impl DeepLink {
    /// Builds the reveal link for `id` inside `filespace`.
    #[must_use]
    pub fn new(filespace: &str, id: &FileId) -> Self {
        Self(format!("lucid://{filespace}/file/{id}?reveal=true"))
    }

    /// The link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
