use reqwest::Client;
use thiserror::Error;

use crate::config::ApiSettings;
use crate::record::{ScoreRecord, WireRecord};

/// Which dataset the screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Sample,
    Remote,
}

/// Failures on the remote path. Aggregation itself never errors.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// The fixed demo dataset compiled into the binary. Synchronous, never
/// fails.
pub fn sample_dataset() -> Vec<ScoreRecord> {
    [
        ("Pakistan", 23.0),
        ("Pakistan", 127.0),
        ("India", 3.0),
        ("India", 71.0),
        ("Australia", 31.0),
        ("India", 22.0),
        ("Pakistan", 81.0),
        ("Pakistan", 81.0),
    ]
    .into_iter()
    .map(|(country, score)| ScoreRecord::new(country, score))
    .collect()
}

/// One GET against the scores endpoint.
///
/// Any transport failure, non-2xx status, or unparseable body yields a
/// `SourceError` and no records; the caller keeps whatever dataset it
/// was already showing. There is no built-in retry; a manual refresh
/// re-enters this same path.
pub async fn fetch_remote(
    client: &Client,
    settings: &ApiSettings,
) -> Result<Vec<ScoreRecord>, SourceError> {
    log::debug!("Fetching scores from {}", settings.base_url);
    let response = client.get(&settings.base_url).send().await?;
    response.error_for_status_ref()?;
    let body = response.text().await?;
    let records = parse_records(&body)?;
    log::info!("Fetched {} score records", records.len());
    Ok(records)
}

/// Parse a response body as an ordered array of `[country, score]`
/// pairs. All-or-nothing: one bad element fails the whole fetch rather
/// than returning partial data.
fn parse_records(body: &str) -> Result<Vec<ScoreRecord>, SourceError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let Some(items) = value.as_array() else {
        return Err(SourceError::Shape(
            "expected a top-level JSON array".to_string(),
        ));
    };
    items
        .iter()
        .map(|item| {
            let wire: WireRecord = serde_json::from_value(item.clone())?;
            Ok(wire.into())
        })
        .collect()
}
