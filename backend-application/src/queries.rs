pub mod asset_queries;
pub mod inventory_queries;
