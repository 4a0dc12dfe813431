use akvget::cli::{handle_command, print_usage, print_version, version_requested, Cli};
use akvget::utils::errors::AkvError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Checked on raw argv so a malformed flag cannot hide it
    if version_requested(std::env::args_os()) {
        print_version();
        std::process::exit(0);
    }

    use clap::Parser;
    let cli = Cli::parse();

    match handle_command(cli).await {
        Ok(()) => {}
        Err(AkvError::MissingKeyVaultUrl) => {
            eprintln!("Flag: missing key vault url");
            print_usage();
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error getting secret: {e}");
            std::process::exit(1);
        }
    }
}
