//! `search` subcommand.

use anyhow::Context;
use log::info;
use wxh_core::client::WeatherClient;
use wxh_core::config::ServiceConfig;

pub async fn run_search(config: &ServiceConfig, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("search query is empty");
    }
    let client = WeatherClient::new(config.clone())?;
    let results = client
        .search(query)
        .await
        .with_context(|| format!("searching for {:?}", query))?;
    info!("{} match(es) for {:?}", results.len(), query);

    if results.is_empty() {
        println!("No matches for {:?}", query);
    }
    for (i, result) in results.iter().enumerate() {
        match result.coordinate() {
            Ok(coordinate) => println!("{}. {}  ({})", i + 1, result.display_name, coordinate),
            Err(_) => println!("{}. {}  (no usable coordinate)", i + 1, result.display_name),
        }
    }
    Ok(())
}
