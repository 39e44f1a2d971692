use std::sync::Arc;

use backend_domain::ports::{AssetRepository, ImageStore, InventorySource};
use backend_domain::{InventoryJoiner, RuntimeConfig};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub inventory_source: Arc<dyn InventorySource>,
    pub image_store: Arc<dyn ImageStore>,
    pub asset_repo: Arc<dyn AssetRepository>,
    pub joiner: Arc<InventoryJoiner>,
    pub metrics: Arc<Metrics>,
}
