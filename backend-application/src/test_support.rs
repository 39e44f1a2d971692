// In-memory stand-ins for the ports, shared by the command and query tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::Mutex;

use backend_domain::ports::{AssetRepository, ImageStore, InventorySource};
use backend_domain::{
    Actor, Asset, CatalogError, ImageError, InventoryEnvelope, InventoryJoiner, NewAsset,
    RuntimeConfig,
};

use crate::{AppState, Metrics};

pub fn creator() -> Actor {
    Actor { user_id: 7, org: 2 }
}

pub fn sample_envelope() -> InventoryEnvelope {
    let tag = |category: &str, value: &str| {
        json!({"category": category, "localized_category_name": "", "localized_tag_name": value})
    };
    serde_json::from_value(json!({
        "assets": [
            {"appid": 730, "contextid": "2", "assetid": "1001", "classid": "11", "instanceid": "0", "amount": "1"},
            {"appid": 730, "contextid": "2", "assetid": "1002", "classid": "22", "instanceid": "0", "amount": "1"},
            {"appid": 730, "contextid": "2", "assetid": "1003", "classid": "99", "instanceid": "0", "amount": "1"},
            {"appid": 730, "contextid": "2", "assetid": "1004", "classid": "11", "instanceid": "0", "amount": "1"}
        ],
        "descriptions": [
            {
                "appid": 730, "classid": "11", "instanceid": "0", "icon_url": "glockicon",
                "name": "格洛克 18 型 | 水灵", "type": "军规级 手枪",
                "tags": [tag("Type", "手枪"), tag("Rarity", "军规级"), tag("Exterior", "久经沙场")]
            },
            {
                "appid": 730, "classid": "22", "instanceid": "0", "icon_url": "ak47icon",
                "name": "AK-47 | 红线", "type": "受限 步枪",
                "tags": [tag("Type", "步枪"), tag("Rarity", "受限"), tag("Exterior", "略有磨损")]
            }
        ],
        "asset_properties": [
            {"appid": 730, "contextid": "2", "assetid": "1001", "asset_properties": [
                {"propertyid": 2, "float_value": "0.2512", "name": "磨损率"}
            ]},
            {"appid": 730, "contextid": "2", "assetid": "1002", "asset_properties": [
                {"propertyid": 2, "float_value": "0.0701", "name": "磨损率"}
            ]}
        ],
        "success": 1
    }))
    .expect("sample envelope")
}

pub struct FakeInventorySource {
    result: Result<InventoryEnvelope, CatalogError>,
    calls: StdMutex<Vec<(String, i64)>>,
}

impl FakeInventorySource {
    pub fn calls(&self) -> Vec<(String, i64)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl InventorySource for FakeInventorySource {
    async fn fetch_inventory(
        &self,
        owner: &str,
        count: i64,
    ) -> Result<InventoryEnvelope, CatalogError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((owner.to_string(), count));
        self.result.clone()
    }
}

#[derive(Default)]
pub struct FakeImageStore {
    failing: StdMutex<Vec<String>>,
    requested: StdMutex<Vec<String>>,
    removed: StdMutex<Vec<String>>,
    counter: AtomicUsize,
}

impl FakeImageStore {
    pub fn fail_for(&self, url_fragment: &str) {
        self.failing
            .lock()
            .expect("failing lock")
            .push(url_fragment.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("requested lock").clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().expect("removed lock").clone()
    }
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn store_remote_image(&self, url: &str) -> Result<String, ImageError> {
        self.requested
            .lock()
            .expect("requested lock")
            .push(url.to_string());
        let failing = self.failing.lock().expect("failing lock").clone();
        if failing.iter().any(|fragment| url.contains(fragment.as_str())) {
            return Err(ImageError::DownloadFailed("404 Not Found".to_string()));
        }
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        Ok(format!("stored-{}.png", n))
    }

    async fn remove_image(&self, name: &str) -> Result<(), ImageError> {
        self.removed
            .lock()
            .expect("removed lock")
            .push(name.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAssetRepository {
    assets: Mutex<Vec<Asset>>,
    rejected_names: Mutex<Vec<String>>,
    require_quality: Mutex<bool>,
    seen_qualities: Mutex<Vec<String>>,
}

impl FakeAssetRepository {
    pub async fn reject_name(&self, name: &str) {
        self.rejected_names.lock().await.push(name.to_string());
    }

    pub async fn require_quality(&self) {
        *self.require_quality.lock().await = true;
    }

    pub async fn seen_qualities(&self) -> Vec<String> {
        self.seen_qualities.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.assets.lock().await.len()
    }
}

#[async_trait]
impl AssetRepository for FakeAssetRepository {
    async fn create_asset(&self, asset: NewAsset) -> anyhow::Result<Asset> {
        self.seen_qualities.lock().await.push(asset.quality.clone());
        if self.rejected_names.lock().await.contains(&asset.name) {
            anyhow::bail!("asset store rejected '{}'", asset.name);
        }
        if *self.require_quality.lock().await && asset.quality.is_empty() {
            anyhow::bail!("quality rejected: empty");
        }
        let mut assets = self.assets.lock().await;
        let created = Asset {
            id: format!("asset-{}", assets.len() + 1),
            name: asset.name,
            image_name: asset.image_name,
            author_id: asset.author_id,
            owner_id: asset.owner_id,
            description: asset.description,
            quality: asset.quality,
            wear: asset.wear,
            category: asset.category,
            wear_value: asset.wear_value,
            org: asset.org,
            time_stamp: Utc::now(),
        };
        assets.push(created.clone());
        Ok(created)
    }

    async fn get_asset(&self, id: &str) -> anyhow::Result<Option<Asset>> {
        Ok(self.assets.lock().await.iter().find(|a| a.id == id).cloned())
    }

    async fn list_by_author(&self, author_id: i64) -> anyhow::Result<Vec<Asset>> {
        Ok(self
            .assets
            .lock()
            .await
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn list_by_owner(&self, owner_id: i64) -> anyhow::Result<Vec<Asset>> {
        Ok(self
            .assets
            .lock()
            .await
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

pub struct TestHarness {
    pub state: AppState,
    pub source: Arc<FakeInventorySource>,
    pub images: Arc<FakeImageStore>,
    pub assets: Arc<FakeAssetRepository>,
}

impl TestHarness {
    pub fn new(result: Result<InventoryEnvelope, CatalogError>) -> Self {
        let source = Arc::new(FakeInventorySource {
            result,
            calls: StdMutex::new(Vec::new()),
        });
        let images = Arc::new(FakeImageStore::default());
        let assets = Arc::new(FakeAssetRepository::default());
        let state = AppState {
            config: RuntimeConfig::default(),
            inventory_source: source.clone(),
            image_store: images.clone(),
            asset_repo: assets.clone(),
            joiner: Arc::new(InventoryJoiner::default()),
            metrics: Arc::new(Metrics::default()),
        };
        Self {
            state,
            source,
            images,
            assets,
        }
    }
}
