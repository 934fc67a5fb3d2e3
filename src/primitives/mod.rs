mod breakpoint;
pub use breakpoint::*;

mod scroll;
pub use scroll::*;
