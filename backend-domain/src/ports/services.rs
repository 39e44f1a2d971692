use async_trait::async_trait;

use crate::entities::InventoryEnvelope;
use crate::errors::{CatalogError, ImageError};

#[async_trait]
pub trait InventorySource: Send + Sync {
    /// `owner` may be a bare steam id or a full inventory URL; `count` is
    /// clamped by the implementation before the request goes out.
    async fn fetch_inventory(
        &self,
        owner: &str,
        count: i64,
    ) -> Result<InventoryEnvelope, CatalogError>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Downloads `url` into local storage and returns the stored file name.
    async fn store_remote_image(&self, url: &str) -> Result<String, ImageError>;

    /// Deletes a previously stored image. Missing files are not an error.
    async fn remove_image(&self, name: &str) -> Result<(), ImageError>;
}
