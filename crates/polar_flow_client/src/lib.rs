//! Minimal `FlowClient` trait and the reqwest-based Polar Flow session.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub mod config;
pub mod date_range;
pub mod http_client;

pub use date_range::{DateRange, TimeFrame};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("{0} is unknown")]
    SportUnknown(String),
    #[error("report request failed with status {status}: {body}")]
    Report { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
}

impl FlowError {
    /// Only an unknown sport is skipped; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FlowError::SportUnknown(_))
    }
}

/// Totals for one sport (or the synthesized `Total` row) over a date range.
#[derive(Clone, Debug, PartialEq)]
pub struct SportResult {
    pub name: String,
    /// Kilometers.
    pub distance: f64,
    /// Seconds.
    pub duration: u64,
    pub count: u64,
    pub ascent: i64,
}

impl SportResult {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance: 0.0,
            duration: 0,
            count: 0,
            ascent: 0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportResponse {
    pub progress_container: ProgressContainer,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProgressContainer {
    pub training_report_summary: TrainingReportSummary,
}

/// Raw units as sent by the service: meters and milliseconds.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrainingReportSummary {
    pub total_distance: f64,
    pub total_duration: f64,
    pub total_training_session_count: f64,
    pub total_ascent: f64,
}

impl TrainingReportSummary {
    pub(crate) fn into_sport_result(self, sport: &str) -> SportResult {
        SportResult {
            name: sport.to_string(),
            distance: self.total_distance / 1000.0,
            duration: (self.total_duration / 1000.0) as u64,
            count: self.total_training_session_count as u64,
            ascent: self.total_ascent as i64,
        }
    }
}

#[async_trait]
pub trait FlowClient: Send + Sync {
    /// Fetch the report summary of one sport.
    ///
    /// Returns [`FlowError::SportUnknown`] when the service answers 500.
    async fn fetch_sport_stats(
        &self,
        sport: &str,
        range: &DateRange,
    ) -> Result<SportResult, FlowError>;
}
