use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod constants;
mod domain;
mod share;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::share::ShareDispatcher;
use crate::state::{App, AppConfig};

/// Sharecard version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sharecard - terminal article preview card with a share menu
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Article URL to share
    #[arg(long)]
    url: Option<String>,

    /// Article title
    #[arg(long)]
    title: Option<String>,

    /// Article description
    #[arg(long)]
    description: Option<String>,

    /// Article lead image URL
    #[arg(long)]
    image: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Share the article directly, without the TUI
    Share {
        /// Platform identifier (facebook, twitter, pinterest)
        platform: String,
    },
    /// Display version
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    apply_cli_overrides(&mut config, &cli);

    if let Some(command) = &cli.command {
        match command {
            Commands::Share { platform } => {
                let dispatcher =
                    ShareDispatcher::new(config.article.to_context(), config.behavior.track_shares);
                dispatcher.dispatch_named(platform);
                return Ok(());
            }
            Commands::Version => {
                println!("sharecard v{}", VERSION);
                return Ok(());
            }
        }
    }

    color_eyre::install()?;
    let mut terminal = tui::init()?;
    let mut app = App::new(config);

    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Applies CLI article overrides onto the loaded configuration.
fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.article.url = url.clone();
    }
    if let Some(title) = &cli.title {
        config.article.title = title.clone();
    }
    if let Some(description) = &cli.description {
        config.article.description = description.clone();
    }
    if let Some(image) = &cli.image {
        config.article.image = Some(image.clone());
    }
}
