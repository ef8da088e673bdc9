#![no_std]

pub use engine::*;
pub use error::*;
pub use mark::*;
pub use types::*;

mod engine;
mod error;
mod mark;
mod types;
