// Domain entities

pub mod asset;
pub mod import_report;
pub mod runtime_config;
pub mod steam_inventory;
pub mod steam_item;

pub use asset::*;
pub use import_report::*;
pub use runtime_config::*;
pub use steam_inventory::*;
pub use steam_item::*;
