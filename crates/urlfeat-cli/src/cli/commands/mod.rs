//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod eval;
mod featurize;
mod output;
mod show_config;

pub use batch::run_batch;
pub use completions::run_completions;
pub use eval::EvalArgs;
pub use featurize::run_featurize;
pub use show_config::run_show_config;
