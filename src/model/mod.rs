pub mod fixture;
pub mod league;
pub mod team;
pub mod types;
pub mod utils;

pub use fixture::*;
pub use league::*;
pub use team::*;
pub use types::*;
pub use utils::*;
