mod chip;
pub use chip::*;

mod chip_group;
pub use chip_group::*;

mod expand;
pub use expand::*;

mod icon;
pub use icon::*;
