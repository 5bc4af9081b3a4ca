//! Raw dataset download.

use gmsl_star::table::SeaLevelTable;
use log::info;
use reqwest::Client;

/// Download the sea level CSV and write it to `output` unchanged.
///
/// The body is parsed before writing; a malformed download is rejected,
/// not saved.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = Client::new();
    info!("Fetching sea level data from {}", url);
    let body = SeaLevelTable::http_request_body(&client, url).await?;

    let table = SeaLevelTable::parse(&body)?;
    info!(
        "Downloaded {} observations across {} missions",
        table.observations.len(),
        table.missions.len()
    );

    tokio::fs::write(output, body).await?;
    info!("Wrote {}", output);
    Ok(())
}
