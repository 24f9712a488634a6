pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu;
pub mod view;

pub use controller::pages::AppState;
pub use error::AppError;

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
