use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use backend_domain::ports::InventorySource;
use backend_domain::{clamp_inventory_count, CatalogError, InventoryEnvelope, SteamConfig, SteamId};

use crate::http_client::read_body_capped;

/// Reads a public Steam community inventory.
pub struct SteamInventoryClient {
    client: Client,
    config: SteamConfig,
}

impl SteamInventoryClient {
    pub fn new(client: Client, config: SteamConfig) -> Self {
        Self { client, config }
    }

    pub fn inventory_url(&self, steam_id: &SteamId, count: u32) -> String {
        format!(
            "{}/{}/{}/{}?l={}&count={}",
            self.config.inventory_base_url,
            steam_id,
            self.config.app_id,
            self.config.context_id,
            self.config.language,
            count
        )
    }
}

#[async_trait]
impl InventorySource for SteamInventoryClient {
    async fn fetch_inventory(
        &self,
        owner: &str,
        count: i64,
    ) -> Result<InventoryEnvelope, CatalogError> {
        let steam_id = SteamId::parse(owner)?;
        let url = self.inventory_url(&steam_id, clamp_inventory_count(count));
        debug!("fetching steam inventory {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::RemoteUnavailable(err.to_string()))?;
        let status = response.status();
        let limit = self.config.max_response_bytes;
        if status != StatusCode::OK {
            let body = read_body_capped(response, limit)
                .await
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            return Err(CatalogError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = read_body_capped(response, limit)
            .await
            .map_err(|err| CatalogError::RemoteUnavailable(err.to_string()))?;
        let envelope: InventoryEnvelope = serde_json::from_slice(&body)
            .map_err(|err| CatalogError::DecodeFailed(err.to_string()))?;
        if !envelope.is_success() {
            return Err(CatalogError::RemoteReportedFailure {
                success: envelope.success,
            });
        }
        Ok(envelope)
    }
}
