pub mod display;
pub mod images;
pub mod overlay;

pub use display::*;
pub use images::*;
pub use overlay::*;
