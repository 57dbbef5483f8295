use std::io::Write;

use clap::Parser;

use polar_summary::{Cli, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    logging::init();
    let cli = Cli::parse();

    let table = polar_summary::run_from_env(&cli).await?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{table}")?;
    stdout.flush()?;
    Ok(())
}
