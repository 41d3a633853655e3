//! User-supplied values for a snippet render.
//!
//! A [`FormState`] mirrors the "code example" form: credentials, station and
//! client names, custom headers, batching knobs and a couple of flags. All
//! fields are optional; anything left empty degrades to a default, a
//! deleted line or a visible placeholder during rendering.

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::token::Token;

/// One custom message header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key, or the `<key>` placeholder when blank
    pub fn key_or_placeholder(&self) -> &str {
        non_blank(&self.key).unwrap_or(Token::HeaderKey.as_str())
    }

    /// Value, or the `<value>` placeholder when blank
    pub fn value_or_placeholder(&self) -> &str {
        non_blank(&self.value).unwrap_or(Token::HeaderValue.as_str())
    }
}

/// Values collected from the code example form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    /// Application user name
    pub username: String,
    /// Connection token or password, depending on the auth mode
    pub password: String,
    pub station_name: String,
    pub producer_name: String,
    pub consumer_name: String,
    pub consumer_group: String,
    pub headers: Vec<HeaderEntry>,
    pub use_headers: bool,
    pub async_produce: bool,
    #[serde(deserialize_with = "string_or_number")]
    pub batch_size: String,
    #[serde(deserialize_with = "string_or_number")]
    pub batch_max_wait_time_ms: String,
    /// JWT lifetime in minutes (REST token generation)
    #[serde(deserialize_with = "string_or_number")]
    pub token_expiry: String,
    #[serde(deserialize_with = "string_or_number")]
    pub refresh_token_expiry: String,
    /// JWT issued by the REST gateway
    pub jwt_token: String,
}

impl FormState {
    /// Header entries to render, with blank keys/values kept for placeholder
    /// substitution. An empty list yields one blank row.
    pub fn header_entries(&self) -> Vec<HeaderEntry> {
        if self.headers.is_empty() {
            vec![HeaderEntry::default()]
        } else {
            self.headers.clone()
        }
    }
}

/// Trimmed value, or `None` when it is blank
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a positive integer form value, falling back to `default`
pub fn numeric_or(raw: &str, default: u64) -> u64 {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Load a form from a YAML or JSON file, chosen by extension
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_form(path: &Path) -> anyhow::Result<FormState> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;
    let is_yaml = path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);
    let form = if is_yaml {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse form file: {}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse form file: {}", path.display()))?
    };
    Ok(form)
}

/// Numeric form inputs arrive as text boxes but may be written as numbers
/// in a form file.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
