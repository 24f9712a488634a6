pub mod filter;
pub mod pagination;
pub mod view_state;

pub use filter::*;
pub use pagination::*;
pub use view_state::*;
