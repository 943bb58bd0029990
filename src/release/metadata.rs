use anyhow::{Context as _, Result};
use serde_json::{Map, Value};

/// Separates the release name from the release body in the notes
pub const NOTES_SEPARATOR: &str = "\n==========\n";

/// The latest published release as reported by the release endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseMetadata {
    pub tag_name: String,
    pub name: String,
    pub html_url: String,
    pub body: String,
}

impl ReleaseMetadata {
    /// Decodes a raw response payload
    ///
    /// The payload must be a non-empty JSON object. Missing fields, `null` and non-string values
    /// all become empty strings.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(payload).context("Release metadata is not valid json")?;

        let Value::Object(object) = value else {
            anyhow::bail!("Release metadata is not a json object");
        };

        if object.is_empty() {
            anyhow::bail!("Release metadata is empty");
        }

        Ok(Self {
            tag_name: string_field(&object, "tag_name"),
            name: string_field(&object, "name"),
            html_url: string_field(&object, "html_url"),
            body: string_field(&object, "body"),
        })
    }

    /// The tag without its `v` prefix
    #[must_use]
    pub fn version(&self) -> &str {
        normalize_tag(&self.tag_name)
    }

    /// Release name and body, as shown in the notes area
    #[must_use]
    pub fn notes(&self) -> String {
        format!("{}{NOTES_SEPARATOR}{}", self.name, self.body)
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Strips a single leading `v` from a tag, unless nothing would be left
#[must_use]
pub fn normalize_tag(tag: &str) -> &str {
    match tag.strip_prefix('v') {
        Some(rest) if !rest.is_empty() => rest,
        _ => tag,
    }
}
