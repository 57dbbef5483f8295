//! Polar Flow training summary: login, one report per sport, totals table.

use polar_flow_client::config::{Config, Settings};
use polar_flow_client::http_client::ReqwestFlowClient;
use polar_flow_client::{DateRange, FlowClient, SportResult};

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod logging;
pub mod table;

mod test_utils;

pub use cli::Cli;
pub use error::{SummaryError, SummaryResult};

/// Query every sport in order and append the `Total` row.
///
/// Unknown sports are logged and left out. Any other error aborts before
/// the remaining sports are queried.
pub async fn collect_results<C>(
    client: &C,
    sports: &[String],
    range: &DateRange,
) -> SummaryResult<Vec<SportResult>>
where
    C: FlowClient + ?Sized,
{
    let mut results = Vec::with_capacity(sports.len() + 1);
    for sport in sports {
        match client.fetch_sport_stats(sport, range).await {
            Ok(result) => results.push(result),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("{e}");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(aggregate::with_total(results))
}

/// Load settings, log in, fetch and render. Returns the table text; nothing
/// is rendered if any step fails.
pub async fn run(cli: &Cli, config: &Config) -> SummaryResult<String> {
    let settings = Settings::from_file(&cli.config)?;
    let range = cli.date_range()?;
    tracing::info!(
        from = %range.from_param(),
        to = %range.to_param(),
        sports = settings.sports.len(),
        "polar_summary: querying"
    );

    let session = ReqwestFlowClient::new(&config.base_url)?
        .login(&settings.login, &settings.password)
        .await?;
    let results = collect_results(&session, &settings.sports, &range).await?;
    Ok(table::render(&results))
}

/// Same as [`run`] but reads the base URL from the environment.
pub async fn run_from_env(cli: &Cli) -> SummaryResult<String> {
    let config = Config::from_env()?;
    run(cli, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeFlowClient, Outcome};
    use polar_flow_client::FlowError;

    fn sports(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn range() -> DateRange {
        DateRange::month(2024, 2).unwrap()
    }

    #[tokio::test]
    async fn unknown_sport_is_skipped_and_excluded_from_total() {
        let client = FakeFlowClient::new()
            .with("RUNNING", Outcome::stats(10.5, 3600, 2, 100))
            .with("CURLING", Outcome::Unknown)
            .with("CYCLING", Outcome::stats(40.25, 5400, 1, 300));

        let res = collect_results(&client, &sports(&["RUNNING", "CURLING", "CYCLING"]), &range())
            .await
            .expect("results");
        let names: Vec<&str> = res.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["RUNNING", "CYCLING", "Total"]);
        let total = res.last().unwrap();
        assert!((total.distance - 50.75).abs() < 1e-9);
        assert_eq!(total.count, 3);
        assert_eq!(client.calls(), vec!["RUNNING", "CURLING", "CYCLING"]);
    }

    #[tokio::test]
    async fn fatal_status_aborts_remaining_sports() {
        let client = FakeFlowClient::new()
            .with("RUNNING", Outcome::stats(10.0, 3600, 1, 0))
            .with("SWIMMING", Outcome::Status(404))
            .with("CYCLING", Outcome::stats(40.0, 5400, 1, 0));

        let err = collect_results(&client, &sports(&["RUNNING", "SWIMMING", "CYCLING"]), &range())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SummaryError::Api(FlowError::Report { status: 404, .. })
        ));
        assert_eq!(client.calls(), vec!["RUNNING", "SWIMMING"]);
    }

    #[tokio::test]
    async fn rendered_rows_match_non_zero_counts() {
        let client = FakeFlowClient::new()
            .with("RUNNING", Outcome::stats(10.0, 3600, 1, 0))
            .with("SWIMMING", Outcome::stats(0.0, 0, 0, 0))
            .with("ROWING", Outcome::Unknown)
            .with("CYCLING", Outcome::stats(40.0, 5400, 4, 0));

        let res = collect_results(
            &client,
            &sports(&["RUNNING", "SWIMMING", "ROWING", "CYCLING"]),
            &range(),
        )
        .await
        .unwrap();
        let rows = table::rows(&res);
        // RUNNING, CYCLING and Total
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.last().unwrap()[0], "Total");
    }

    #[tokio::test]
    async fn no_sports_yields_only_zero_total() {
        let client = FakeFlowClient::new();
        let res = collect_results(&client, &[], &range()).await.unwrap();
        assert_eq!(res, vec![SportResult::empty("Total")]);
    }

    #[tokio::test]
    async fn missing_config_fails_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: dir.path().join("summary_settings.json"),
            month: Some(2),
            year: Some(2024),
            whole: false,
        };
        // Unroutable base url: reaching the network would be a different error.
        let config = Config {
            base_url: "http://127.0.0.1:9".into(),
        };
        let err = run(&cli, &config).await.unwrap_err();
        assert!(
            matches!(err, SummaryError::Api(FlowError::Config(_))),
            "{err:?}"
        );
    }
}
