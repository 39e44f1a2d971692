use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::asset_queries;
use backend_application::AppState;
use backend_domain::{Asset, AssetListQuery};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Asset>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let asset = asset_queries::get_asset(&state, &id).await?;
    Ok(Json(asset))
}

pub async fn list_assets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AssetListQuery>,
) -> Result<Json<Vec<Asset>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let assets = asset_queries::list_assets(&state, query).await?;
    Ok(Json(assets))
}
