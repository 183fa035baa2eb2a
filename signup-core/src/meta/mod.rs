pub mod catalog;
pub mod loader;

pub use catalog::*;
pub use loader::*;
