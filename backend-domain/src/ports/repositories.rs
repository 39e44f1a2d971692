use async_trait::async_trait;

use crate::entities::{Asset, NewAsset};

/// The asset store collaborator. The import only ever calls `create_asset`
/// and treats any error as "skip this item".
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn create_asset(&self, asset: NewAsset) -> anyhow::Result<Asset>;
    async fn get_asset(&self, id: &str) -> anyhow::Result<Option<Asset>>;
    async fn list_by_author(&self, author_id: i64) -> anyhow::Result<Vec<Asset>>;
    async fn list_by_owner(&self, owner_id: i64) -> anyhow::Result<Vec<Asset>>;
}
