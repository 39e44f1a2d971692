use tracing::error;

use crate::AppError;
use crate::AppState;
use backend_domain::{InventoryQuery, SteamItem};

/// Fetches the remote inventory and joins it into normalized items.
pub async fn fetch_items(
    state: &AppState,
    owner: &str,
    count: i64,
) -> Result<Vec<SteamItem>, AppError> {
    let envelope = state
        .inventory_source
        .fetch_inventory(owner, count)
        .await
        .map_err(|err| {
            if !err.is_input_error() {
                state.metrics.record_fetch_error();
                error!("steam inventory fetch failed: {}", err);
            }
            AppError::Catalog(err)
        })?;
    Ok(state.joiner.join(&envelope))
}

pub async fn preview_inventory(
    state: &AppState,
    query: InventoryQuery,
) -> Result<Vec<SteamItem>, AppError> {
    let steam_id = query.steam_id.unwrap_or_default();
    if steam_id.trim().is_empty() {
        return Err(AppError::BadRequest("steamId is required".to_string()));
    }
    let count = query
        .count
        .unwrap_or_else(|| i64::from(state.config.import_count));
    let items = fetch_items(state, &steam_id, count).await?;
    state.metrics.record_preview();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_envelope, TestHarness};
    use backend_domain::CatalogError;

    #[tokio::test]
    async fn preview_returns_joined_items() {
        let harness = TestHarness::new(Ok(sample_envelope()));
        let items = preview_inventory(
            &harness.state,
            InventoryQuery {
                steam_id: Some("76561198000000000".to_string()),
                count: None,
            },
        )
        .await
        .expect("preview");
        assert_eq!(items.len(), 3);
        assert_eq!(harness.source.calls(), vec![("76561198000000000".to_string(), 1000)]);
    }

    #[tokio::test]
    async fn preview_passes_requested_count_through() {
        let harness = TestHarness::new(Ok(sample_envelope()));
        preview_inventory(
            &harness.state,
            InventoryQuery {
                steam_id: Some("76561198000000000".to_string()),
                count: Some(5000),
            },
        )
        .await
        .expect("preview");
        assert_eq!(harness.source.calls()[0].1, 5000);
    }

    #[tokio::test]
    async fn preview_requires_steam_id() {
        let harness = TestHarness::new(Ok(sample_envelope()));
        let err = preview_inventory(&harness.state, InventoryQuery::default())
            .await
            .expect_err("missing steam id");
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(harness.source.calls().is_empty());
    }

    #[tokio::test]
    async fn preview_surfaces_remote_failure() {
        let harness = TestHarness::new(Err(CatalogError::RemoteReportedFailure { success: 0 }));
        let err = preview_inventory(
            &harness.state,
            InventoryQuery {
                steam_id: Some("76561198000000000".to_string()),
                count: None,
            },
        )
        .await
        .expect_err("remote failure");
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::RemoteReportedFailure { success: 0 })
        ));
    }
}
