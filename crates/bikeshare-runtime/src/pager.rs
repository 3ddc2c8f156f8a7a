//! Paginated display of raw trip rows.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::formatting::render_table;
use bikeshare_data::table::TripTable;
use tracing::debug;

use crate::console::Console;

pub const END_OF_DATA: &str = "No more data to display.";

/// How a paging run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerOutcome {
    /// The user answered "no".
    Declined,
    /// Every row has been shown.
    Exhausted,
}

/// Shows `page_size` rows per "yes" answer, starting at row 0.
pub struct RawDataPager {
    page_size: usize,
    cursor: usize,
}

impl RawDataPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    /// Index of the next row to show.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ask, show, advance until the user declines or the data runs out.
    ///
    /// Once the cursor reaches the end of the table the end-of-data notice is
    /// printed and paging stops without asking again.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        table: &TripTable,
    ) -> Result<PagerOutcome> {
        writeln!(console.out(), "\nDisplaying Raw Data...\n")?;
        let prompt = format!(
            "Would you like to see {} lines of raw data? Enter yes or no: ",
            self.page_size
        );

        loop {
            if !console.ask_yes_no(&prompt)? {
                debug!("pager declined at row {}", self.cursor);
                return Ok(PagerOutcome::Declined);
            }

            let end = self.cursor + self.page_size;
            self.print_page(console.out(), table, end)?;
            self.cursor = end;

            if self.cursor >= table.len() {
                writeln!(console.out(), "{}", END_OF_DATA)?;
                return Ok(PagerOutcome::Exhausted);
            }
        }
    }

    fn print_page<W: Write>(&self, out: &mut W, table: &TripTable, end: usize) -> Result<()> {
        let rows: Vec<Vec<String>> = table
            .rows(self.cursor, end)
            .iter()
            .map(|r| table.display_row(r))
            .collect();
        for line in render_table(&table.display_headers(), &rows) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
