use anyhow::{Context, Result};
use nws_check::{NwsCheckConfig, NwsClient, SmokeTest, logging};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let config = NwsCheckConfig::default();
    config.validate()?;

    logging::init(&config.logging)?;
    info!("nws_check version: {}", nws_check::VERSION);

    let client = NwsClient::new(&config.api)?;

    let stdout = io::stdout();
    let mut smoke_test = SmokeTest::new(&client, &config, stdout.lock());
    smoke_test
        .run_to_completion()
        .context("Failed to write report to stdout")?;

    Ok(())
}
