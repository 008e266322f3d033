use serde::{Deserialize, Serialize};

// Configuration types shared by the server and the publisher
pub mod config;

// Re-export commonly used config types for convenience
pub use config::{CONFIG_FILE, ConfigError, ServerConfig};

/// One dictionary entry: a tag with its translations and usage count.
///
/// Serialized field names are the single-letter keys the converter page
/// consumes (`t`, `tr`, `j`, `c`, `g`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag identifier, e.g. `long_hair`.
    #[serde(rename = "t")]
    pub tag: String,

    /// Translated label.
    #[serde(rename = "tr")]
    pub translation: String,

    /// Japanese label.
    #[serde(rename = "j")]
    pub japanese: String,

    /// Occurrence count on the source site.
    #[serde(rename = "c")]
    pub count: i64,

    /// Tag group. The published artifact carries it for every record;
    /// the live API omits the key entirely.
    #[serde(rename = "g", default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A count range mapped to a display style.
///
/// Clients match a tag's count against rules first-match-wins, so any
/// sequence handed out must be ordered by `min_count` descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRule {
    /// Lower bound of the count range.
    pub min_count: i64,

    /// Upper bound of the count range.
    pub max_count: i64,

    /// Display color, e.g. `#ff8a8b`.
    pub color_code: String,

    /// Human-readable rule name.
    pub label: String,

    /// Grouping category. The live query always selects one; threshold
    /// files may leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// The `{tags, thresholds}` payload shared by the live API and the
/// published artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDictionary {
    pub tags: Vec<TagRecord>,
    pub thresholds: Vec<ThresholdRule>,
}
