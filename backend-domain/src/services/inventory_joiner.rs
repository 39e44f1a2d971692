use std::collections::HashMap;

use tracing::debug;

use crate::entities::{AssetPropertyRecord, InventoryEnvelope, ItemDescription, SteamItem, STEAM_ICON_BASE_URL};
use crate::value_objects::{Category, DescriptionKey, Quality};

pub const RARITY_TAG: &str = "Rarity";
pub const EXTERIOR_TAG: &str = "Exterior";
pub const TYPE_TAG: &str = "Type";
/// Name of the per-instance float property (schinese locale).
pub const WEAR_FRACTION_PROPERTY: &str = "磨损率";

/// Joins the three inventory collections into normalized items.
#[derive(Debug, Clone)]
pub struct InventoryJoiner {
    icon_base_url: String,
}

impl Default for InventoryJoiner {
    fn default() -> Self {
        Self::new(STEAM_ICON_BASE_URL)
    }
}

impl InventoryJoiner {
    pub fn new(icon_base_url: impl Into<String>) -> Self {
        Self {
            icon_base_url: icon_base_url.into(),
        }
    }

    pub fn join(&self, envelope: &InventoryEnvelope) -> Vec<SteamItem> {
        let descriptions = envelope
            .descriptions
            .iter()
            .map(|desc| (DescriptionKey::new(&desc.classid, &desc.instanceid), desc))
            .collect::<HashMap<_, _>>();
        let properties = envelope
            .asset_properties
            .iter()
            .map(|record| (record.assetid.as_str(), record))
            .collect::<HashMap<_, _>>();

        let mut items = Vec::with_capacity(envelope.assets.len());
        for asset in &envelope.assets {
            let key = DescriptionKey::new(&asset.classid, &asset.instanceid);
            let Some(desc) = descriptions.get(&key) else {
                debug!(
                    "no description for asset {} (class {}, instance {})",
                    asset.assetid, asset.classid, asset.instanceid
                );
                continue;
            };
            items.push(SteamItem {
                asset_id: asset.assetid.clone(),
                name: desc.name.clone(),
                image_url: self.icon_url(desc),
                quality: Quality::from_rarity(desc.tag(RARITY_TAG)),
                wear: desc.tag(EXTERIOR_TAG).to_string(),
                category: Category::from_type_label(desc.tag(TYPE_TAG)),
                wear_value: wear_value(properties.get(asset.assetid.as_str()).copied()),
            });
        }
        items
    }

    fn icon_url(&self, desc: &ItemDescription) -> String {
        if desc.icon_url.is_empty() {
            return String::new();
        }
        format!("{}{}", self.icon_base_url, desc.icon_url)
    }
}

fn wear_value(record: Option<&AssetPropertyRecord>) -> String {
    record
        .into_iter()
        .flat_map(|record| record.asset_properties.iter())
        .filter(|prop| prop.name == WEAR_FRACTION_PROPERTY)
        .find_map(|prop| prop.float_value.as_deref().filter(|value| !value.is_empty()))
        .unwrap_or("")
        .to_string()
}
