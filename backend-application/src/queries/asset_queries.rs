use crate::AppError;
use crate::AppState;
use backend_domain::{Asset, AssetListQuery};

pub async fn get_asset(state: &AppState, id: &str) -> Result<Asset, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("id is required".to_string()));
    }
    state
        .asset_repo
        .get_asset(id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn list_assets(state: &AppState, query: AssetListQuery) -> Result<Vec<Asset>, AppError> {
    match (query.owner_id, query.author_id) {
        (Some(owner_id), None) => Ok(state.asset_repo.list_by_owner(owner_id).await?),
        (None, Some(author_id)) => Ok(state.asset_repo.list_by_author(author_id).await?),
        _ => Err(AppError::BadRequest(
            "exactly one of ownerId or authorId is required".to_string(),
        )),
    }
}
