use axum::http::HeaderMap;

use backend_domain::{Actor, RuntimeConfig};

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const ORG_ID_HEADER: &str = "X-Org-Id";

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

/// Reads the identity resolved by the upstream gateway.
pub fn extract_actor(headers: &HeaderMap) -> Option<Actor> {
    let user_id = header_i64(headers, USER_ID_HEADER)?;
    let org = header_i64(headers, ORG_ID_HEADER)?;
    Some(Actor { user_id, org })
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
