use anyhow::{anyhow, Result};

use backend_domain::{Category, NewAsset, Quality, Wear};

/// Field checks the asset store applies before persisting.
pub fn validate_new_asset(asset: &NewAsset) -> Result<()> {
    if asset.name.trim().is_empty() {
        return Err(anyhow!("asset name is empty"));
    }
    if Quality::from_label(&asset.quality).is_none() {
        return Err(anyhow!("invalid quality '{}'", asset.quality));
    }
    if Category::from_label(&asset.category).is_none() {
        return Err(anyhow!("invalid category '{}'", asset.category));
    }
    if !asset.wear.is_empty() && Wear::from_label(&asset.wear).is_none() {
        return Err(anyhow!("invalid wear '{}'", asset.wear));
    }
    if !asset.wear_value.is_empty() {
        let value = asset
            .wear_value
            .parse::<f64>()
            .map_err(|_| anyhow!("wear value '{}' is not a number", asset.wear_value))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(anyhow!("wear value {} is outside 0..=1", value));
        }
    }
    Ok(())
}
