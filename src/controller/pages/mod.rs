pub mod derive;
pub mod http_handlers;

pub use derive::*;
pub use http_handlers::*;
