use crate::cli::args::Cli;
use crate::utils::errors::Result;
use crate::utils::output::write_secret;
use crate::vault::client::fetch_secret;
use std::io;

/// Run the token-then-fetch flow and print the secret
pub async fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr, stdout carries only the secret
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "akvget=warn",  // Default: warnings only
            1 => "akvget=info",  // -v: info level
            2 => "akvget=debug", // -vv: debug level
            _ => "akvget=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    // Validated before any network call
    let config = cli.config()?;
    tracing::debug!("Resolved configuration: {config:?}");

    let secret = fetch_secret(&config).await?;

    write_secret(&mut io::stdout().lock(), &secret)?;
    Ok(())
}
