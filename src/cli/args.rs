use crate::config::{Config, BEARER_TOKEN_ENV, DEFAULT_MANAGED_IDENTITY_URL, MANAGED_IDENTITY_URL_ENV};
use crate::utils::errors::Result;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "akvget")]
#[command(about = "Fetch a secret from Azure Key Vault using managed identity or a bearer token")]
#[command(long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show the version number and information
    #[arg(long)]
    pub version: bool,

    /// Token URL to request
    #[arg(long, env = MANAGED_IDENTITY_URL_ENV, default_value = DEFAULT_MANAGED_IDENTITY_URL)]
    pub managed_identity_url: String,

    /// Bearer token to use. Overrides managed identity url
    #[arg(long, env = BEARER_TOKEN_ENV, hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Secret URL to request
    #[arg(long)]
    pub keyvault_url: Option<String>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve flags and environment into the run configuration
    pub fn config(&self) -> Result<Config> {
        Config::new(
            self.keyvault_url.clone(),
            Some(self.managed_identity_url.clone()),
            self.bearer_token.clone(),
        )
    }
}

/// Look for a version request in raw argv, before any other flag is validated.
///
/// Accepts `--version` and `-version`, optionally as `=true`. Stops at `--`.
pub fn version_requested<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .skip(1)
        .map(Into::into)
        .take_while(|arg| arg != "--")
        .any(|arg| {
            matches!(
                arg.to_str(),
                Some("--version" | "-version" | "--version=true" | "-version=true")
            )
        })
}

pub fn print_version() {
    eprintln!("Version: {VERSION}");
}

/// Print the full usage text to stderr
pub fn print_usage() {
    let mut command = Cli::command();
    eprintln!("{}", command.render_help());
}
