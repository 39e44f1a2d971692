use std::collections::HashSet;

use tracing::{info, warn};

use crate::queries::inventory_queries;
use crate::AppError;
use crate::AppState;
use backend_domain::{Actor, ImportReport, ImportRequest, NewAsset, SkippedItem, SteamItem};

/// Imports the selected items of a Steam inventory as assets owned by `actor`.
///
/// Items are processed one at a time. A failed image download falls back to
/// the default image; a failed asset creation skips the item and is recorded
/// in the report. Only the fetch itself can fail the whole call.
pub async fn import_inventory(
    state: &AppState,
    actor: Actor,
    request: ImportRequest,
) -> Result<ImportReport, AppError> {
    if actor.org != state.config.creator_org {
        return Err(AppError::Forbidden(format!(
            "only members of org {} may import from steam",
            state.config.creator_org
        )));
    }
    if request.steam_id.trim().is_empty() {
        return Err(AppError::BadRequest("steamId is required".to_string()));
    }

    let items = inventory_queries::fetch_items(
        state,
        &request.steam_id,
        i64::from(state.config.import_count),
    )
    .await?;

    let wanted = request
        .asset_ids
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect::<HashSet<_>>();
    let selected = items
        .into_iter()
        .filter(|item| wanted.is_empty() || wanted.contains(item.asset_id.as_str()))
        .collect::<Vec<_>>();

    let mut report = ImportReport::default();
    for item in selected {
        let stored_image = resolve_image(state, &item).await;
        let image_name = match &stored_image {
            Some(name) => name.clone(),
            None => {
                report.image_fallbacks += 1;
                state.config.default_image_name.clone()
            }
        };

        let new_asset = NewAsset {
            name: item.name.clone(),
            image_name,
            author_id: actor.user_id,
            owner_id: actor.user_id,
            description: state.config.import_description.clone(),
            quality: item.quality_label().to_string(),
            wear: item.wear.clone(),
            category: item.category.label().to_string(),
            wear_value: item.wear_value.clone(),
            org: actor.org,
        };
        match state.asset_repo.create_asset(new_asset).await {
            Ok(asset) => report.created.push(asset),
            Err(err) => {
                warn!("skipping steam asset {} ({}): {}", item.asset_id, item.name, err);
                if let Some(name) = stored_image {
                    discard_image(state, &name).await;
                }
                report.skipped.push(SkippedItem {
                    asset_id: item.asset_id,
                    name: item.name,
                    reason: err.to_string(),
                });
            }
        }
    }

    state.metrics.record_import(
        report.created.len(),
        report.skipped.len(),
        report.image_fallbacks,
    );
    info!(
        "steam import for user {}: created={} skipped={} image_fallbacks={}",
        actor.user_id,
        report.created.len(),
        report.skipped.len(),
        report.image_fallbacks
    );
    Ok(report)
}

async fn resolve_image(state: &AppState, item: &SteamItem) -> Option<String> {
    if item.image_url.is_empty() {
        return None;
    }
    match state.image_store.store_remote_image(&item.image_url).await {
        Ok(name) => Some(name),
        Err(err) => {
            warn!("image for steam asset {} unavailable: {}", item.asset_id, err);
            None
        }
    }
}

// The item is already skipped; a leftover file is only logged.
async fn discard_image(state: &AppState, name: &str) {
    if name == state.config.default_image_name {
        return;
    }
    if let Err(err) = state.image_store.remove_image(name).await {
        warn!("failed to remove orphaned image {}: {}", name, err);
    }
}
