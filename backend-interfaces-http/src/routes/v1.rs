use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{asset_handlers, ops_handlers, steam_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/steam/inventory",
            get(steam_handlers::preview_inventory),
        )
        .route("/v1/steam/import", post(steam_handlers::import_inventory))
        .route("/v1/assets", get(asset_handlers::list_assets))
        .route("/v1/assets/:id", get(asset_handlers::get_asset))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
