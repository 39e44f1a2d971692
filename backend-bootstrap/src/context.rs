use std::sync::Arc;

use anyhow::Result;

use backend_application::{AppState, Metrics};
use backend_domain::InventoryJoiner;
use backend_infrastructure::{
    build_http_client, AppConfig, AssetFileRepository, LocalImageStore, SteamInventoryClient,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let steam_config = config.to_steam_config();

        // One outbound client for the whole process; reqwest clones share the pool.
        let http_client = build_http_client(&steam_config)?;
        let joiner = InventoryJoiner::new(steam_config.icon_base_url.clone());
        let image_store = LocalImageStore::new(http_client.clone(), &steam_config.image_dir)
            .with_max_bytes(steam_config.max_response_bytes);
        let inventory_source = SteamInventoryClient::new(http_client, steam_config);

        let state = AppState {
            config: runtime_config,
            inventory_source: Arc::new(inventory_source),
            image_store: Arc::new(image_store),
            asset_repo: Arc::new(AssetFileRepository::new(&config.asset_store_path)),
            joiner: Arc::new(joiner),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}

#[cfg(test)]
mod tests {
    use backend_domain::AssetRepository;

    use super::*;

    #[tokio::test]
    async fn wires_state_from_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            creator_org: 9,
            asset_store_path: dir.path().join("assets.json").to_string_lossy().to_string(),
            use_system_proxy: false,
            ..AppConfig::default()
        };
        let context = AppContext::new(&config).expect("context");
        assert_eq!(context.state.config.creator_org, 9);
        assert!(context
            .state
            .asset_repo
            .list_by_owner(1)
            .await
            .expect("empty store")
            .is_empty());
    }
}
