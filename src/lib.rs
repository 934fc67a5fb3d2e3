pub mod primitives;

pub mod extensions;

pub mod components;

pub mod theme;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
