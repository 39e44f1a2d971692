pub mod asset_files;

pub use asset_files::*;
