use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ringslider_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "ringslider")]
#[command(author, version, about = "An infinitely wrapping terminal ring slider")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive demo
    Run {
        /// Starting value
        #[arg(long, default_value_t = 20.0)]
        value: f64,
        /// Value change per tick (overrides config)
        #[arg(long)]
        stride: Option<f64>,
        /// Lower value bound (overrides config)
        #[arg(long)]
        min: Option<f64>,
        /// Upper value bound (overrides config)
        #[arg(long)]
        max: Option<f64>,
    },
    /// Replay scroll movements headlessly and print the value trajectory
    Simulate {
        /// Comma-separated pixel movements, e.g. "310,-40,95"
        #[arg(long)]
        drags: String,
        /// Starting value
        #[arg(long, default_value_t = 0.0)]
        value: f64,
        /// Viewport width in columns
        #[arg(long, default_value_t = 60)]
        width: u16,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with the defaults
    Init,
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    // Initialize logging. Log to stderr so the alternate screen and any
    // simulate output stay clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run {
            value,
            stride,
            min,
            max,
        }) => commands::run::run(config, value, stride, min, max),
        Some(Commands::Simulate {
            drags,
            value,
            width,
        }) => commands::simulate::run(config, &drags, value, width),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::init(&config),
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Show => commands::config::show(&config),
        },
        None => commands::run::run(config, 20.0, None, None, None),
    }
}
