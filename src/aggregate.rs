use std::collections::HashMap;

use crate::record::ScoreRecord;

/// One bar of the chart: a country label and its mean score.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryAverage {
    pub country: String,
    pub mean: f64,
}

/// Average score for the country named by `query`, matched
/// case-insensitively against the full label.
///
/// - A blank query yields `None` ("not available"), never zero.
/// - Zero matching records yields `None`.
/// - Records with a missing or non-finite score are skipped; if every
///   match is skipped the result is `None`.
/// - The mean is rounded to 2 decimal places for display.
pub fn filtered_average(records: &[ScoreRecord], query: &str) -> Option<f64> {
    if query.trim().is_empty() {
        return None;
    }

    let matched: Vec<f64> = records
        .iter()
        .filter(|r| r.country.eq_ignore_ascii_case(query))
        .filter_map(|r| r.valid_score())
        .collect();

    if matched.is_empty() {
        None
    } else {
        let mean = matched.iter().sum::<f64>() / matched.len() as f64;
        Some((mean * 100.0).round() / 100.0)
    }
}

/// Per-country mean scores, one entry per distinct label, in first-seen
/// order of each label while scanning front-to-back.
///
/// Grouping is case-sensitive, unlike the filter match above; the
/// asymmetry is contractual. Records with an empty country label or an
/// invalid score are dropped before grouping, and a country left with
/// no valid scores does not appear at all. If any resulting mean is
/// non-finite the whole table collapses to empty (whole-or-nothing, no
/// partially bad chart).
pub fn country_averages(records: &[ScoreRecord]) -> Vec<CountryAverage> {
    let mut order: Vec<String> = Vec::new();
    let mut scores: HashMap<String, Vec<f64>> = HashMap::new();

    for record in records {
        if record.country.is_empty() {
            continue;
        }
        let Some(score) = record.valid_score() else {
            continue;
        };
        if !scores.contains_key(&record.country) {
            order.push(record.country.clone());
        }
        scores.entry(record.country.clone()).or_default().push(score);
    }

    let table: Vec<CountryAverage> = order
        .into_iter()
        .map(|country| {
            let vals = &scores[&country];
            let mean = vals.iter().sum::<f64>() / vals.len() as f64;
            CountryAverage { country, mean }
        })
        .collect();

    if table.iter().any(|entry| !entry.mean.is_finite()) {
        return Vec::new();
    }
    table
}
