pub mod asset_handlers;
pub mod ops_handlers;
pub mod steam_handlers;

pub use asset_handlers::*;
pub use ops_handlers::*;
pub use steam_handlers::*;
