pub mod page;
pub mod runtime;

pub use page::*;
pub use runtime::*;
