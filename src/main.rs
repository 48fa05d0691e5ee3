use std::time::Duration;

use anyhow::Result;

mod aggregate;
mod config;
mod record;
mod session;
mod source;

use session::{ScreenState, Session};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    log::info!("Cricket score analyzer starting");

    let settings = config::Settings::load()?;

    let mut session = Session::new();
    session.select_sample();

    println!("Sample data averages by country:");
    for entry in session.chart() {
        println!("  {}: {:.2}", entry.country, entry.mean);
    }
    for query in ["India", "pakistan", "Brazil"] {
        match session.set_filter(query) {
            Some(avg) => println!("Average for {}: {:.2}", query, avg),
            None => println!("Average for {}: N/A", query),
        }
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.general.request_timeout_seconds))
        .build()?;

    let generation = session.begin_remote_fetch();
    let result = source::fetch_remote(&client, &settings.api).await;
    session.apply_fetch_result(generation, result);

    match session.state() {
        ScreenState::Ready => {
            println!("Server data averages by country:");
            for entry in session.chart() {
                println!("  {}: {:.2}", entry.country, entry.mean);
            }
        }
        ScreenState::Error(message) => {
            // Fetch failures are surfaced, never fatal; the sample data
            // shown above stays displayed.
            println!("Could not fetch server data: {}", message);
        }
        _ => {}
    }

    log::info!("Cricket score analyzer finished");
    Ok(())
}
