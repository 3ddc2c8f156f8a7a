use std::path::{Path, PathBuf};

use bikeshare_core::models::City;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"warn"` if the level string is not recognised. Output goes
/// to stderr so log lines never mix with the reports on stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

/// Map CLI level names onto `tracing` level names.
fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        // tracing has nothing above error.
        "ERROR" | "CRITICAL" => "error".to_string(),
        other => other.to_lowercase(),
    }
}

// ── Data-directory discovery ───────────────────────────────────────────────────

/// Decide where the city CSV files live.
///
/// An explicit `--data-dir` always wins. Otherwise the first of these that
/// holds at least one city file is used:
/// 1. the current directory
/// 2. `<platform data dir>/bikeshare` (e.g. `~/.local/share/bikeshare`)
///
/// Falls back to the current directory, where the load will report the
/// missing file.
pub fn discover_data_dir(explicit: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let platform = dirs::data_dir().map(|d| d.join("bikeshare"));
    resolve_data_dir(explicit, &cwd, platform.as_deref())
}

fn resolve_data_dir(explicit: Option<&Path>, cwd: &Path, platform: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    std::iter::once(cwd)
        .chain(platform)
        .find(|dir| has_city_files(dir))
        .unwrap_or(cwd)
        .to_path_buf()
}

fn has_city_files(dir: &Path) -> bool {
    City::ALL
        .iter()
        .any(|city| dir.join(city.file_name()).is_file())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
