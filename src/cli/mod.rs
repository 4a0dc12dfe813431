pub mod args;
pub mod commands;

pub use args::{print_usage, print_version, version_requested, Cli};
pub use commands::handle_command;
