pub mod cli;
pub mod config;
pub mod utils;
pub mod vault;

pub use config::Config;
pub use utils::errors;
pub use vault::{auth, client};
