/// Sonora - local audio player for the terminal
use anyhow::Context;
use clap::Parser;
use sonora_audio_desktop::RodioEngine;
use sonora_cli::{app, config::AppConfig, presenter::TerminalPresenter, router};
use sonora_core::TrackCatalog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sonora")]
#[command(about = "Play the audio files in a local folder", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./sonora.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the catalog is built from
    #[arg(short, long)]
    storage_dir: Option<PathBuf>,

    /// Starter tracks copied into an empty storage directory
    #[arg(short, long)]
    bundled_dir: Option<PathBuf>,

    /// Print the catalog and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?
        .with_overrides(cli.storage_dir, cli.bundled_dir);

    // Logs go to stderr so they don't interleave with the player view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "Storage directory: {}",
        config.library.storage_dir.display()
    );

    let presenter = Arc::new(TerminalPresenter::stdout());

    if cli.list {
        router::bootstrap(&config.library);
        let catalog = router::create_catalog(&config.library).load();
        presenter.render_catalog(&catalog, None);
        return Ok(());
    }

    let engine = RodioEngine::open_default().context("Cannot start audio output")?;
    let mut session = router::create_module(&config, engine, &presenter)?;

    let input = app::spawn_stdin_reader().context("Cannot read from stdin")?;
    app::run(&mut session, &presenter, &input)
}
