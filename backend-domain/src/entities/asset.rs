// Asset entity
// Records owned by the external asset store; the import only creates them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub image_name: String,
    pub author_id: i64,
    pub owner_id: i64,
    pub description: String,
    pub quality: String,
    pub wear: String,
    pub category: String,
    pub wear_value: String,
    pub org: i64,
    pub time_stamp: DateTime<Utc>,
}

/// Arguments of the asset store's create operation. Label fields are plain
/// strings; validating them is the store's job.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub image_name: String,
    pub author_id: i64,
    pub owner_id: i64,
    pub description: String,
    pub quality: String,
    pub wear: String,
    pub category: String,
    pub wear_value: String,
    pub org: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetListQuery {
    pub owner_id: Option<i64>,
    pub author_id: Option<i64>,
}
