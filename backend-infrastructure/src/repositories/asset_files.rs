use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use backend_domain::{Asset, AssetRepository, NewAsset};

use crate::config::validate_new_asset;

const EMPTY_DESCRIPTION: &str = "暂无描述";

/// Asset store kept as a single JSON array on disk.
pub struct AssetFileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AssetFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> anyhow::Result<Vec<Asset>> {
        if !Path::new(&self.path).exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let assets: Vec<Asset> = serde_json::from_str(&content)?;
        Ok(assets)
    }

    async fn save(&self, assets: &[Asset]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(assets)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl AssetRepository for AssetFileRepository {
    async fn create_asset(&self, asset: NewAsset) -> anyhow::Result<Asset> {
        validate_new_asset(&asset)?;
        let description = if asset.description.trim().is_empty() {
            EMPTY_DESCRIPTION.to_string()
        } else {
            asset.description
        };
        let created = Asset {
            id: Uuid::new_v4().to_string(),
            name: asset.name,
            image_name: asset.image_name,
            author_id: asset.author_id,
            owner_id: asset.owner_id,
            description,
            quality: asset.quality,
            wear: asset.wear,
            category: asset.category,
            wear_value: asset.wear_value,
            org: asset.org,
            time_stamp: Utc::now(),
        };

        let _guard = self.write_lock.lock().await;
        let mut assets = self.load().await?;
        assets.push(created.clone());
        self.save(&assets).await?;
        Ok(created)
    }

    async fn get_asset(&self, id: &str) -> anyhow::Result<Option<Asset>> {
        let _guard = self.write_lock.lock().await;
        Ok(self.load().await?.into_iter().find(|asset| asset.id == id))
    }

    async fn list_by_author(&self, author_id: i64) -> anyhow::Result<Vec<Asset>> {
        let _guard = self.write_lock.lock().await;
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|asset| asset.author_id == author_id)
            .collect())
    }

    async fn list_by_owner(&self, owner_id: i64) -> anyhow::Result<Vec<Asset>> {
        let _guard = self.write_lock.lock().await;
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|asset| asset.owner_id == owner_id)
            .collect())
    }
}
