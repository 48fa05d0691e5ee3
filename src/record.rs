use serde::Deserialize;

/// One (country, score) observation.
///
/// The score is kept as an `Option` so that malformed entries coming off
/// the wire can sit in the raw dataset without ever reaching an
/// aggregate: a record only contributes to an average when
/// [`valid_score`](Self::valid_score) returns `Some`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub country: String,
    pub score: Option<f64>,
}

impl ScoreRecord {
    pub fn new(country: impl Into<String>, score: f64) -> Self {
        Self {
            country: country.into(),
            score: Some(score),
        }
    }

    /// The score, if present and finite. Aggregation never sees anything
    /// that fails this check.
    pub fn valid_score(&self) -> Option<f64> {
        match self.score {
            Some(s) if s.is_finite() => Some(s),
            _ => None,
        }
    }
}

/// Wire form served by the scores endpoint: a 2-element array like
/// `["Pakistan", 23]`. The second element is accepted as any JSON value
/// and normalized to `Option<f64>` during conversion.
#[derive(Debug, Deserialize)]
pub struct WireRecord(String, serde_json::Value);

impl From<WireRecord> for ScoreRecord {
    fn from(wire: WireRecord) -> Self {
        ScoreRecord {
            country: wire.0,
            score: wire.1.as_f64(),
        }
    }
}
