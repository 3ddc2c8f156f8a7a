//! The interactive session loop.
//!
//! Each iteration asks for filters, loads and filters the city's trips,
//! prints the four reports, pages through raw rows, then offers to restart.
//! Nothing carries over between iterations.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_data::reader::load_data;
use tracing::info;

use crate::console::Console;
use crate::pager::RawDataPager;
use crate::prompts::get_filters;
use crate::report::print_all;

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

// ── SessionState ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Done,
}

// ── Session ───────────────────────────────────────────────────────────────────

pub struct Session {
    /// Directory holding the city CSV files.
    data_dir: PathBuf,
    /// Raw rows shown per pager page.
    page_size: usize,
}

impl Session {
    pub fn new(data_dir: impl Into<PathBuf>, page_size: usize) -> Self {
        Self {
            data_dir: data_dir.into(),
            page_size,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Run iterations until the user declines to restart.
    ///
    /// Closing standard input ends the session normally. File errors are
    /// returned to the caller.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let mut state = SessionState::Running;
        let mut iterations = 0u32;

        while state == SessionState::Running {
            iterations += 1;
            state = match self.run_iteration(console) {
                Ok(next) => next,
                Err(BikeshareError::InputClosed) => {
                    info!("input closed; ending session");
                    SessionState::Done
                }
                Err(e) => return Err(e),
            };
        }

        info!("session finished after {} iteration(s)", iterations);
        Ok(())
    }

    /// One pass: filters → load → reports → raw data → restart question.
    pub fn run_iteration<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState> {
        let selection = get_filters(console)?;
        let table = load_data(&self.data_dir, &selection)?;

        print_all(console.out(), &table)?;

        let outcome = RawDataPager::new(self.page_size).run(console, &table)?;
        tracing::debug!("pager finished: {:?}", outcome);

        let answer = console.ask(RESTART_PROMPT)?;
        Ok(next_state(&answer))
    }
}

/// Only an exact (case-insensitive) "yes" restarts; typos end the session.
pub fn next_state(answer: &str) -> SessionState {
    if answer.to_lowercase() == "yes" {
        SessionState::Running
    } else {
        SessionState::Done
    }
}
