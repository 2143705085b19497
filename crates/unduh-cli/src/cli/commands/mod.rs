//! CLI command handlers, one file per command.

mod batch;
mod completions;
mod config;
mod resolve;

pub use batch::run_batch;
pub use completions::{run_completions, run_manpage};
pub use config::run_config;
pub use resolve::run_resolve;
