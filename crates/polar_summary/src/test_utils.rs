//! Fake `FlowClient` used by the pipeline unit tests.
#![cfg(test)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use polar_flow_client::{DateRange, FlowClient, FlowError, SportResult};

/// What the fake answers for one sport.
#[derive(Clone, Debug)]
pub enum Outcome {
    Stats(SportResult),
    Unknown,
    Status(u16),
}

impl Outcome {
    pub fn stats(distance: f64, duration: u64, count: u64, ascent: i64) -> Self {
        Outcome::Stats(SportResult {
            name: String::new(),
            distance,
            duration,
            count,
            ascent,
        })
    }
}

/// Sports missing from the table answer 500 like the real service.
#[derive(Default)]
pub struct FakeFlowClient {
    outcomes: HashMap<String, Outcome>,
    calls: Mutex<Vec<String>>,
}

impl FakeFlowClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sport: &str, outcome: Outcome) -> Self {
        self.outcomes.insert(sport.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlowClient for FakeFlowClient {
    async fn fetch_sport_stats(
        &self,
        sport: &str,
        _range: &DateRange,
    ) -> Result<SportResult, FlowError> {
        self.calls.lock().unwrap().push(sport.to_string());
        match self.outcomes.get(sport) {
            Some(Outcome::Stats(r)) => Ok(SportResult {
                name: sport.to_string(),
                ..r.clone()
            }),
            Some(Outcome::Status(status)) => Err(FlowError::Report {
                status: *status,
                body: String::new(),
            }),
            Some(Outcome::Unknown) | None => Err(FlowError::SportUnknown(sport.to_string())),
        }
    }
}
