pub mod types;
pub mod validation;

use clap::Parser;
pub use types::*;

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::from(Args::parse())
}
