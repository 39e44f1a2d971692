// Import report entity

use serde::{Deserialize, Serialize};

use crate::entities::Asset;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuery {
    pub steam_id: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub steam_id: String,
    /// Empty means "import everything".
    #[serde(default)]
    pub asset_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedItem {
    pub asset_id: String,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub created: Vec<Asset>,
    pub skipped: Vec<SkippedItem>,
    pub image_fallbacks: usize,
}

impl ImportReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }
}
