use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use polar_flow_client::{DateRange, FlowError};
use std::path::PathBuf;

/// Polar Flow progress summary
#[derive(Parser, Debug, Clone)]
#[command(name = "polar_summary", version)]
pub struct Cli {
    /// the configuration file
    #[arg(long, default_value = "./summary_settings.json")]
    pub config: PathBuf,

    /// month to report on (1-12) [default: current month]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// year to report on [default: current year]
    #[arg(long)]
    pub year: Option<i32>,

    /// report on the whole year instead of a single month
    #[arg(long)]
    pub whole: bool,
}

impl Cli {
    pub fn date_range(&self) -> Result<DateRange, FlowError> {
        self.date_range_at(Local::now().date_naive())
    }

    /// Missing month/year are taken from `today`.
    pub fn date_range_at(&self, today: NaiveDate) -> Result<DateRange, FlowError> {
        let year = self.year.unwrap_or_else(|| today.year());
        let month = self.month.unwrap_or_else(|| today.month());
        DateRange::resolve(year, month, self.whole)
    }
}
