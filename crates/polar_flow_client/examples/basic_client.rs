use polar_flow_client::{
    DateRange, FlowClient,
    config::{Config, Settings},
    http_client::ReqwestFlowClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects ./summary_settings.json with at least one sport
    let settings = match Settings::from_file("summary_settings.json") {
        Ok(s) => s,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let cfg = Config::from_env()?;
    let session = ReqwestFlowClient::new(&cfg.base_url)?
        .login(&settings.login, &settings.password)
        .await?;

    let range = DateRange::whole_year(2025)?;
    for sport in &settings.sports {
        match session.fetch_sport_stats(sport, &range).await {
            Ok(r) => println!(
                "{}: {:.2} km in {} sessions",
                r.name, r.distance, r.count
            ),
            Err(e) if e.is_recoverable() => eprintln!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
