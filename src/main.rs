use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tui_overlays::config::{AttachSetting, Config};
use tui_overlays::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "tui-overlays", version, about = "Dialog and tip overlay showcase")]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. Logging is off without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Relocate tips into this region (e.g. `#sidebar`).
    #[arg(long)]
    tips_target: Option<String>,

    /// Default tip lifetime in milliseconds.
    #[arg(long)]
    tip_duration_ms: Option<u64>,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(target) = &self.tips_target {
            config.tips.attach = Some(AttachSetting::Selector(target.clone()));
        }
        if let Some(ms) = self.tip_duration_ms {
            config.tips.default_duration_ms = Some(ms);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Logging goes to a file only; the terminal is owned by the UI.
fn init_tracing(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;
    let config = args.load_config()?;
    // Tip timers are local tasks.
    tokio::task::LocalSet::new()
        .run_until(runtime::run(config))
        .await
}
