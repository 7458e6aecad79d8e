pub mod correspondence;
pub mod loader;
pub mod naming;

pub use correspondence::*;
pub use loader::*;
pub use naming::*;
