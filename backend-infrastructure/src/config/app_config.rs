use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{
    RuntimeConfig, SteamConfig, DEFAULT_MAX_RESPONSE_BYTES, MAX_INVENTORY_COUNT,
    STEAM_ICON_BASE_URL, STEAM_INVENTORY_BASE_URL,
};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub log_dir: Option<String>,
    pub creator_org: i64,
    pub asset_store_path: String,
    pub image_dir: String,
    pub default_image_name: String,
    pub import_description: String,
    pub import_count: u32,
    pub steam_inventory_base_url: String,
    pub steam_icon_base_url: String,
    pub steam_app_id: u32,
    pub steam_context_id: u32,
    pub steam_language: String,
    pub steam_http_proxy: Option<String>,
    pub use_system_proxy: bool,
    pub http_timeout_seconds: u64,
    pub http_connect_timeout_seconds: u64,
    pub http_idle_timeout_seconds: u64,
    pub http_max_response_bytes: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            api_token: None,
            log_dir: None,
            creator_org: 2,
            asset_store_path: "./data/assets.json".to_string(),
            image_dir: "./public/images".to_string(),
            default_image_name: "default.png".to_string(),
            import_description: "从 Steam 导入".to_string(),
            import_count: 1000,
            steam_inventory_base_url: STEAM_INVENTORY_BASE_URL.to_string(),
            steam_icon_base_url: STEAM_ICON_BASE_URL.to_string(),
            steam_app_id: 730,
            steam_context_id: 2,
            steam_language: "schinese".to_string(),
            steam_http_proxy: None,
            use_system_proxy: true,
            http_timeout_seconds: 25,
            http_connect_timeout_seconds: 15,
            http_idle_timeout_seconds: 30,
            http_max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 120,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("ARMORY_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        if let Some(proxy) = &self.steam_http_proxy {
            if proxy.trim().is_empty() {
                self.steam_http_proxy = None;
            }
        }
        self.steam_inventory_base_url = self
            .steam_inventory_base_url
            .trim()
            .trim_end_matches('/')
            .to_string();
        self.steam_language = self.steam_language.trim().to_string();
        self.default_image_name = self.default_image_name.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.asset_store_path = resolve_path(base, &self.asset_store_path);
        self.image_dir = resolve_path(base, &self.image_dir);
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.creator_org <= 0 {
            return Err(anyhow!("creator_org must be greater than 0"));
        }
        if self.default_image_name.is_empty() {
            return Err(anyhow!("default_image_name must not be empty"));
        }
        if self.import_count == 0 || i64::from(self.import_count) > MAX_INVENTORY_COUNT {
            return Err(anyhow!(
                "import_count must be between 1 and {}",
                MAX_INVENTORY_COUNT
            ));
        }
        reqwest::Url::parse(&self.steam_inventory_base_url)
            .map_err(|err| anyhow!("invalid steam_inventory_base_url: {}", err))?;
        if let Some(proxy) = &self.steam_http_proxy {
            reqwest::Url::parse(proxy).map_err(|err| anyhow!("invalid steam_http_proxy: {}", err))?;
        }
        if self.http_timeout_seconds == 0
            || self.http_connect_timeout_seconds == 0
            || self.http_idle_timeout_seconds == 0
        {
            return Err(anyhow!("http timeouts must be greater than 0"));
        }
        if self.http_max_response_bytes == 0 {
            return Err(anyhow!("http_max_response_bytes must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            creator_org: self.creator_org,
            default_image_name: self.default_image_name.clone(),
            import_description: self.import_description.clone(),
            import_count: self.import_count,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_steam_config(&self) -> SteamConfig {
        SteamConfig {
            inventory_base_url: self.steam_inventory_base_url.clone(),
            icon_base_url: self.steam_icon_base_url.clone(),
            app_id: self.steam_app_id,
            context_id: self.steam_context_id,
            language: self.steam_language.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
            connect_timeout_seconds: self.http_connect_timeout_seconds,
            idle_timeout_seconds: self.http_idle_timeout_seconds,
            max_response_bytes: self.http_max_response_bytes,
            proxy_url: self.steam_http_proxy.clone(),
            use_system_proxy: self.use_system_proxy,
            image_dir: self.image_dir.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("ARMORY_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("ARMORY_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("ARMORY_LOG_DIR") {
            self.log_dir = Some(value);
        }
        if let Ok(value) = env::var("ARMORY_CREATOR_ORG") {
            self.creator_org = value.parse().unwrap_or(self.creator_org);
        }
        if let Ok(value) = env::var("ARMORY_ASSET_STORE_PATH") {
            self.asset_store_path = value;
        }
        if let Ok(value) = env::var("ARMORY_IMAGE_DIR") {
            self.image_dir = value;
        }
        if let Ok(value) = env::var("ARMORY_DEFAULT_IMAGE_NAME") {
            self.default_image_name = value;
        }
        if let Ok(value) = env::var("ARMORY_STEAM_INVENTORY_BASE_URL") {
            self.steam_inventory_base_url = value;
        }
        if let Ok(value) = env::var("ARMORY_STEAM_LANGUAGE") {
            self.steam_language = value;
        }
        // STEAM_HTTP_PROXY is the older name; ARMORY_STEAM_HTTP_PROXY wins if both are set.
        if let Ok(value) = env::var("STEAM_HTTP_PROXY") {
            self.steam_http_proxy = Some(value);
        }
        if let Ok(value) = env::var("ARMORY_STEAM_HTTP_PROXY") {
            self.steam_http_proxy = Some(value);
        }
        if let Ok(value) = env::var("ARMORY_USE_SYSTEM_PROXY") {
            self.use_system_proxy = value.parse().unwrap_or(self.use_system_proxy);
        }
        if let Ok(value) = env::var("ARMORY_HTTP_TIMEOUT_SECONDS") {
            self.http_timeout_seconds = value.parse().unwrap_or(self.http_timeout_seconds);
        }
        if let Ok(value) = env::var("ARMORY_HTTP_CONNECT_TIMEOUT_SECONDS") {
            self.http_connect_timeout_seconds =
                value.parse().unwrap_or(self.http_connect_timeout_seconds);
        }
        if let Ok(value) = env::var("ARMORY_HTTP_IDLE_TIMEOUT_SECONDS") {
            self.http_idle_timeout_seconds =
                value.parse().unwrap_or(self.http_idle_timeout_seconds);
        }
        if let Ok(value) = env::var("ARMORY_HTTP_MAX_RESPONSE_BYTES") {
            self.http_max_response_bytes = value.parse().unwrap_or(self.http_max_response_bytes);
        }
        if let Ok(value) = env::var("ARMORY_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("ARMORY_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
