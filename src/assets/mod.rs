mod assets;
pub use assets::*;

mod chips_assets;
pub use chips_assets::*;
