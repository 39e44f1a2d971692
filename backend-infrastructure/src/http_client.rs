use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Proxy, Response};
use tracing::info;

use backend_domain::SteamConfig;

/// Builds the single outbound client shared by the inventory client and the
/// image store. Proxy settings are fixed here; nothing reads the environment
/// per request.
pub fn build_http_client(config: &SteamConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .pool_idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

    if let Some(proxy_url) = &config.proxy_url {
        info!("steam requests use proxy {}", proxy_url);
        builder = builder.proxy(Proxy::all(proxy_url).context("invalid steam proxy url")?);
    } else if !config.use_system_proxy {
        builder = builder.no_proxy();
    }

    builder.build().context("failed to build http client")
}

/// Reads a response body, failing once it grows past `limit` bytes.
pub async fn read_body_capped(mut response: Response, limit: u64) -> Result<Vec<u8>> {
    if let Some(length) = response.content_length() {
        if length > limit {
            return Err(anyhow!(
                "response of {} bytes exceeds the {} byte limit",
                length,
                limit
            ));
        }
    }
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if (body.len() + chunk.len()) as u64 > limit {
            return Err(anyhow!("response exceeds the {} byte limit", limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
