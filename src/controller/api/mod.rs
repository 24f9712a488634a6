pub mod client;
pub mod loader;

pub use client::*;
pub use loader::*;
