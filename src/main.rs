use clap::Parser;
use shipshape::cli::Cli;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.logging().init();

    if let Err(e) = shipshape::app::run(cli).await {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
