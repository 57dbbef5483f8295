//! Error type for the summary run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("{0}")]
    Api(#[from] polar_flow_client::FlowError),
}

/// Result type alias for summary operations.
pub type SummaryResult<T> = Result<T, SummaryError>;
