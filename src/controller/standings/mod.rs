pub mod bracket;
pub mod fixtures;
pub mod ranker;
pub mod source;

pub use bracket::*;
pub use fixtures::*;
pub use ranker::*;
pub use source::*;
