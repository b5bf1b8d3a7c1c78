use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ServeArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => serve(&args).await,
        Some(Commands::Health(args)) => commands::health::run(&args).await,
        None => serve(&ServeArgs::default()).await,
    }
}

async fn serve(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing, RUST_LOG wins over --log
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    commands::serve::run(args).await
}
