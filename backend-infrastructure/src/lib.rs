pub mod config;
pub mod http_client;
pub mod repositories;
pub mod steam;

pub use config::*;
pub use http_client::*;
pub use repositories::*;
pub use steam::*;
