// Normalized Steam item
// Output of the inventory join, returned by preview and consumed by import

use serde::{Serialize, Serializer};

use crate::value_objects::{Category, Quality};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamItem {
    pub asset_id: String,
    pub name: String,
    pub image_url: String,
    #[serde(serialize_with = "serialize_quality")]
    pub quality: Option<Quality>,
    pub wear: String,
    pub category: Category,
    pub wear_value: String,
}

impl SteamItem {
    pub fn quality_label(&self) -> &'static str {
        self.quality.map(|quality| quality.label()).unwrap_or("")
    }
}

fn serialize_quality<S>(quality: &Option<Quality>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(quality.map(|quality| quality.label()).unwrap_or(""))
}
