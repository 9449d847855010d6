use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use turingchat::connector::api::{Container, ContainerConfig, Router};
use turingchat::Commands;

#[derive(Parser)]
#[command(name = "turingchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model name, passed through to the service unvalidated
    #[arg(long, global = true, default_value = "gemini-2.5-flash")]
    model: String,

    #[arg(long, global = true, default_value_t = 0.7)]
    temperature: f32,

    /// Use a canned offline model instead of the Gemini API
    #[arg(long, global = true)]
    mock_model: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present so GEMINI_API_KEY can live in a local secrets file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        model: cli.model,
        temperature: cli.temperature,
        mock_model: cli.mock_model,
    })?;

    if container.mock_model() {
        info!("Running with the mock chat model; no API calls will be made");
    }

    let router = Router::new(&container);
    router.route(cli.command).await
}
