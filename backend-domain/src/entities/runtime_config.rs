// Runtime configuration handed to the application and adapters

use serde::{Deserialize, Serialize};

pub const STEAM_INVENTORY_BASE_URL: &str = "https://steamcommunity.com/inventory";
pub const STEAM_ICON_BASE_URL: &str = "https://steamcommunity-a.akamaihd.net/economy/image/";
pub const DEFAULT_MAX_RESPONSE_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub creator_org: i64,
    pub default_image_name: String,
    pub import_description: String,
    pub import_count: u32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            api_token: None,
            creator_org: 2,
            default_image_name: "default.png".to_string(),
            import_description: "从 Steam 导入".to_string(),
            import_count: 1000,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 120,
        }
    }
}

/// Settings of the shared outbound client and the Steam endpoints it calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamConfig {
    pub inventory_base_url: String,
    pub icon_base_url: String,
    pub app_id: u32,
    pub context_id: u32,
    pub language: String,
    pub http_timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    /// Upper bound on any single inventory or image body.
    pub max_response_bytes: u64,
    pub proxy_url: Option<String>,
    pub use_system_proxy: bool,
    pub image_dir: String,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            inventory_base_url: STEAM_INVENTORY_BASE_URL.to_string(),
            icon_base_url: STEAM_ICON_BASE_URL.to_string(),
            app_id: 730,
            context_id: 2,
            language: "schinese".to_string(),
            http_timeout_seconds: 25,
            connect_timeout_seconds: 15,
            idle_timeout_seconds: 30,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            proxy_url: None,
            use_system_proxy: true,
            image_dir: "public/images".to_string(),
        }
    }
}
