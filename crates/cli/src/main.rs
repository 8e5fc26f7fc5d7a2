use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use library_app::catalog::CatalogStore;
use library_app::menu;
use library_kernel::settings::{LogFormat, Settings};
use library_kernel::{ActionRegistry, Console};

#[derive(Parser)]
#[command(
    name = "library",
    about = "Interactive in-memory library catalog: books, members, and loans",
    version
)]
struct Cli {
    /// Directory holding base.toml and <env>.toml (default: $LIBRARY_CONFIG_DIR or ./config)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Log output format on stderr (pretty or json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_from(cli.config_dir.as_deref())
        .with_context(|| "failed to load library settings")?;
    if let Some(format) = cli.log_format {
        settings.telemetry.log_format = format;
    }

    library_telemetry::init(&settings.telemetry)?;

    tracing::info!(env = ?settings.environment, "library bootstrap complete");

    let mut registry = ActionRegistry::new();
    menu::register_all(&mut registry).with_context(|| "failed to register menu actions")?;

    let mut store = CatalogStore::new();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut console = Console::new(&mut stdin, &mut stdout, settings.menu.abort_sentinel.clone());

    menu::run_session(&registry, &mut store, &settings, &mut console)
}
