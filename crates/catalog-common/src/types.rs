use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Opaque item identity, numeric for print blueprints and text for gallery images.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Numeric(n) => f.pad(&n.to_string()),
            ItemId::Text(s) => f.pad(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Numeric(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// A record the pipeline can search, order and page through.
///
/// The pipeline never mutates items; stages hand back references in a new order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub description: String,
    /// Exact-match categorical field (the brand, for print blueprints).
    #[serde(default)]
    pub category: String,
    /// Unix seconds.
    #[serde(default)]
    pub created_at: i64,
}

impl CatalogItem {
    /// Fields matched by free-text search.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.name, &self.brand, &self.model, &self.description]
    }
}

/// A print-product template offered by the fulfillment service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blueprint {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// RFC 3339 timestamp, when the service reports one.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<&Blueprint> for CatalogItem {
    fn from(bp: &Blueprint) -> Self {
        CatalogItem {
            id: ItemId::Numeric(bp.id),
            name: bp.title.clone(),
            brand: bp.brand.clone(),
            model: bp.model.clone(),
            description: bp.description.clone(),
            category: bp.brand.clone(),
            created_at: bp.created_at.as_deref().map(parse_timestamp).unwrap_or(0),
        }
    }
}

/// Lifecycle of a generated image in the user's gallery.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    #[default]
    Generated,
    ReadyToPrint,
    Printed,
    #[serde(other)]
    Other,
}

impl ImageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ImageStatus::Generated => "generated",
            ImageStatus::ReadyToPrint => "ready_to_print",
            ImageStatus::Printed => "printed",
            ImageStatus::Other => "other",
        }
    }
}

/// An AI-generated image saved to the user's gallery.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedImage {
    pub image_id: String,
    pub user_id: String,
    pub prompt: String,
    pub image_url: String,
    pub created_at: String,
    #[serde(default)]
    pub status: ImageStatus,
}

impl From<&SavedImage> for CatalogItem {
    fn from(img: &SavedImage) -> Self {
        CatalogItem {
            id: ItemId::Text(img.image_id.clone()),
            name: img.prompt.clone(),
            brand: String::new(),
            model: String::new(),
            description: img.prompt.clone(),
            category: img.status.label().to_string(),
            created_at: parse_timestamp(&img.created_at),
        }
    }
}

/// Parse a timestamp to unix seconds, 0 when unparseable.
///
/// Accepts RFC 3339, a zone-less `YYYY-MM-DDTHH:MM:SS` and a bare
/// `YYYY-MM-DD`; the last two are read as UTC.
pub fn parse_timestamp(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.timestamp();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return naive.and_utc().timestamp();
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp())
        .unwrap_or(0)
}

/// Blueprint listing envelope returned by the fulfillment proxy.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlueprintList {
    #[serde(default)]
    pub data: Vec<Blueprint>,
}

/// One server-side page of the user's gallery.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImagePage {
    #[serde(default)]
    pub images: Vec<SavedImage>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Gallery listing envelope; `success: false` carries an error message instead of data.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ImagePage>,
    #[serde(default)]
    pub error: Option<String>,
}
