pub mod asset_probe;
pub mod viewer_loader;

pub use asset_probe::*;
pub use viewer_loader::*;
