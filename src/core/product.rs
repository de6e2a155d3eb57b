//! Catalog records as they come out of the document store
//!
//! Store documents are loosely shaped: any field may be missing, numbers may
//! arrive as strings or nulls, and the creation time is written either as a
//! plain epoch number or as a timestamp object with a `seconds` field. The
//! types here absorb all of that at deserialization time so the rest of the
//! crate works with total, defaulted values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Creation time of a product document
///
/// Both wire shapes are accepted:
///
/// ```json
/// { "createdAt": 1714000000 }
/// { "createdAt": { "seconds": 1714000000, "nanoseconds": 0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Plain numeric epoch value
    Epoch(f64),

    /// Structured timestamp carrying a seconds field
    Timestamp { seconds: f64 },
}

impl CreatedAt {
    /// Numeric value used for ordering
    pub fn seconds(&self) -> f64 {
        match self {
            CreatedAt::Epoch(value) => *value,
            CreatedAt::Timestamp { seconds } => *seconds,
        }
    }
}

/// A product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Document identifier; empty means the record is invalid
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,

    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,

    #[serde(deserialize_with = "lenient_string")]
    pub category: String,

    #[serde(deserialize_with = "lenient_string")]
    pub color: String,

    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,

    #[serde(deserialize_with = "lenient_string_list")]
    pub sizes: Vec<String>,

    /// Admin-assigned manual rank
    #[serde(
        deserialize_with = "lenient_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<i64>,

    #[serde(
        deserialize_with = "lenient_created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<CreatedAt>,

    #[serde(
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with the identity fields set and everything else defaulted
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            ..Default::default()
        }
    }

    /// Records without an identifier are never shown
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }

    /// Creation time in seconds, `0` when absent
    pub fn created_seconds(&self) -> f64 {
        self.created_at.map(|c| c.seconds()).unwrap_or(0.0)
    }

    /// Compare two records newest first
    pub fn cmp_newest(&self, other: &Self) -> Ordering {
        other.created_seconds().total_cmp(&self.created_seconds())
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_created_at(mut self, created_at: CreatedAt) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A brand shown on the showcase grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,

    #[serde(deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,

    #[serde(deserialize_with = "lenient_string_list")]
    pub seasons: Vec<String>,
}

impl Brand {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient field decoding
// ---------------------------------------------------------------------------

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(number_of)
        .unwrap_or(0.0))
}

fn lenient_position<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    // Only real JSON numbers count as a manual position
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        _ => None,
    })
}

fn lenient_created_at<'de, D>(deserializer: D) -> Result<Option<CreatedAt>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().map(CreatedAt::Epoch),
        Some(Value::Object(map)) => Some(CreatedAt::Timestamp {
            seconds: map.get("seconds").and_then(number_of).unwrap_or(0.0),
        }),
        _ => None,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
