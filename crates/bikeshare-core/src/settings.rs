use clap::Parser;
use std::path::PathBuf;

/// Default number of raw rows shown per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Explore US bikeshare trip data interactively
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Explore US bikeshare trip data interactively",
    version
)]
pub struct Settings {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Raw data rows shown per page (1-100)
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply derived overrides.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list, so
    /// tests can run without spawning a subprocess.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `--debug` overrides whatever log level was requested.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Page size as a row count.
    pub fn page_size(&self) -> usize {
        self.page_size as usize
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
