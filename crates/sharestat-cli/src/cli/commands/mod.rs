//! CLI command handlers. Each command is in its own file.

mod classify;
mod completions;
mod count;

pub use classify::run_classify;
pub use completions::run_completions;
pub use count::run_count;
