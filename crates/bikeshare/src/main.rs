mod bootstrap;

use anyhow::{Context, Result};
use bikeshare_core::settings::Settings;
use bikeshare_runtime::console::Console;
use bikeshare_runtime::session::Session;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::discover_data_dir(settings.data_dir.as_deref());
    tracing::info!(
        "Data directory: {}, page size: {}",
        data_dir.display(),
        settings.page_size
    );

    let session = Session::new(&data_dir, settings.page_size());
    let mut console = Console::stdio();

    session
        .run(&mut console)
        .with_context(|| format!("bikeshare session failed (data dir {})", data_dir.display()))?;

    Ok(())
}
