// Port traits the core depends on
// Infrastructure provides the Steam client, image store and asset store

pub mod repositories;
pub mod services;

pub use repositories::*;
pub use services::*;
