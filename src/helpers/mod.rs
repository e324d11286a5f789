//! Helper functions shared by the loader and the generator

mod date;
mod fs;
mod html;

pub use date::*;
pub use fs::*;
pub use html::*;
