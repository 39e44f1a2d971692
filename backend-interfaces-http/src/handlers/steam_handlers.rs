use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use backend_application::commands::import_commands;
use backend_application::queries::inventory_queries;
use backend_application::AppState;
use backend_domain::{Asset, ImportReport, ImportRequest, InventoryQuery, SkippedItem, SteamItem};

use crate::error::HttpError;
use crate::middleware::{authorize, extract_actor};

#[derive(Serialize)]
pub struct InventoryPreviewResponse {
    pub items: Vec<SteamItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub count: usize,
    pub items: Vec<Asset>,
    pub skipped: Vec<SkippedItem>,
    pub image_fallbacks: usize,
}

impl From<ImportReport> for ImportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            count: report.created_count(),
            items: report.created,
            skipped: report.skipped,
            image_fallbacks: report.image_fallbacks,
        }
    }
}

pub async fn preview_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<InventoryQuery>,
) -> Result<Json<InventoryPreviewResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let items = inventory_queries::preview_inventory(&state, query).await?;
    Ok(Json(InventoryPreviewResponse { items }))
}

pub async fn import_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let actor = extract_actor(&headers).ok_or(HttpError::Unauthorized)?;
    let report = import_commands::import_inventory(&state, actor, payload).await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_asset() -> Asset {
        serde_json::from_value(serde_json::json!({
            "id": "a1",
            "name": "AK-47 | 红线",
            "imageName": "default.png",
            "authorId": 7,
            "ownerId": 7,
            "description": "从 Steam 导入",
            "quality": "紫色",
            "wear": "略有磨损",
            "category": "步枪",
            "wearValue": "0.0701",
            "org": 2,
            "timeStamp": "2026-01-01T00:00:00Z"
        }))
        .expect("asset json")
    }

    #[test]
    fn import_response_carries_counts() {
        let report = ImportReport {
            created: vec![sample_asset()],
            skipped: vec![SkippedItem {
                asset_id: "1002".to_string(),
                name: "印花 | 小鸡".to_string(),
                reason: "invalid quality".to_string(),
            }],
            image_fallbacks: 1,
        };
        let body = serde_json::to_value(ImportResponse::from(report)).expect("json");
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["imageName"], "default.png");
        assert_eq!(body["skipped"][0]["assetId"], "1002");
        assert_eq!(body["imageFallbacks"], 1);
    }
}
