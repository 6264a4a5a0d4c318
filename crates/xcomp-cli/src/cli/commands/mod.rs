//! CLI command handlers. Each command is in its own file.

mod completions;
mod download;
mod generate;
mod init_dir;
mod merge;
mod prepare;
mod summary;

pub use completions::{run_completions, run_manpage};
pub use download::run_download;
pub use generate::run_generate;
pub use init_dir::run_init_dir;
pub use merge::run_merge;
pub use prepare::run_prepare;
