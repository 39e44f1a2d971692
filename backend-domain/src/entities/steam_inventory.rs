// Steam inventory entities
// Wire shapes of the community inventory endpoint; held only for one call

use serde::{Deserialize, Serialize};

pub const INVENTORY_SUCCESS: i64 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryEnvelope {
    #[serde(default)]
    pub assets: Vec<InventoryAsset>,
    #[serde(default)]
    pub descriptions: Vec<ItemDescription>,
    #[serde(default)]
    pub asset_properties: Vec<AssetPropertyRecord>,
    #[serde(default)]
    pub success: i64,
}

impl InventoryEnvelope {
    pub fn is_success(&self) -> bool {
        self.success == INVENTORY_SUCCESS
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryAsset {
    pub appid: i64,
    pub contextid: String,
    pub assetid: String,
    pub classid: String,
    pub instanceid: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDescription {
    pub appid: i64,
    pub classid: String,
    pub instanceid: String,
    pub icon_url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub market_name: String,
    pub market_hash_name: String,
    pub tags: Vec<ItemTag>,
}

impl ItemDescription {
    /// Localized tag value for a tag category such as `Rarity` or `Exterior`.
    pub fn tag(&self, category: &str) -> &str {
        self.tags
            .iter()
            .find(|tag| tag.category == category)
            .map(|tag| tag.localized_tag_name.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTag {
    pub category: String,
    pub localized_category_name: String,
    pub localized_tag_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPropertyRecord {
    pub appid: i64,
    pub contextid: String,
    pub assetid: String,
    pub asset_properties: Vec<AssetProperty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetProperty {
    pub propertyid: i64,
    pub float_value: Option<String>,
    pub int_value: Option<String>,
    pub name: String,
}
