pub mod image_store;
pub mod inventory_client;

pub use image_store::*;
pub use inventory_client::*;
