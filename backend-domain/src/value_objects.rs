// Domain value objects
pub mod category;
pub mod identifiers;
pub mod quality;
pub mod wear;

pub use category::*;
pub use identifiers::*;
pub use quality::*;
pub use wear::*;
