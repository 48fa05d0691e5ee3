use crate::aggregate::{self, CountryAverage};
use crate::record::ScoreRecord;
use crate::source::{self, SourceError, SourceMode};

/// Screen-level status as one tagged value, so impossible combinations
/// (loading and error at once) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Owns the current dataset and everything derived from it.
///
/// The dataset is only ever replaced wholesale, and the chart table is
/// recomputed right after every replacement. Each fetch carries the
/// generation that started it; a result arriving for an older
/// generation is ignored, so overlapping fetches resolve
/// last-writer-wins without partial overwrites.
pub struct Session {
    mode: SourceMode,
    dataset: Vec<ScoreRecord>,
    chart: Vec<CountryAverage>,
    filter_query: String,
    state: ScreenState,
    fetch_generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: SourceMode::Sample,
            dataset: Vec::new(),
            chart: Vec::new(),
            filter_query: String::new(),
            state: ScreenState::Idle,
            fetch_generation: 0,
        }
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn dataset(&self) -> &[ScoreRecord] {
        &self.dataset
    }

    /// Per-country averages for the current dataset, in first-seen
    /// country order.
    pub fn chart(&self) -> &[CountryAverage] {
        &self.chart
    }

    /// Switch to the embedded dataset. Synchronous and infallible from
    /// any state, including `Error`; also invalidates any fetch still
    /// in flight.
    pub fn select_sample(&mut self) {
        self.mode = SourceMode::Sample;
        self.fetch_generation += 1;
        self.install_dataset(source::sample_dataset());
    }

    /// Enter remote mode, or manually refresh it: move to `Loading` and
    /// hand back the generation the caller must return together with
    /// the fetch result. Safe to re-invoke while a fetch is in flight;
    /// the superseded response is dropped on arrival.
    pub fn begin_remote_fetch(&mut self) -> u64 {
        self.mode = SourceMode::Remote;
        self.state = ScreenState::Loading;
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Apply the outcome of a remote fetch. A failure is logged and
    /// reflected in the screen state, but the previously displayed
    /// dataset and chart stay exactly as they were.
    pub fn apply_fetch_result(
        &mut self,
        generation: u64,
        result: Result<Vec<ScoreRecord>, SourceError>,
    ) {
        if generation != self.fetch_generation {
            log::debug!(
                "Ignoring stale fetch result (generation {}, current {})",
                generation,
                self.fetch_generation
            );
            return;
        }
        match result {
            Ok(records) => self.install_dataset(records),
            Err(e) => {
                log::error!("Failed to fetch server data: {}", e);
                self.state = ScreenState::Error(e.to_string());
            }
        }
    }

    /// Record the typed country query and return the matching average,
    /// if any. Synchronous, recomputed on every keystroke.
    pub fn set_filter(&mut self, query: &str) -> Option<f64> {
        self.filter_query = query.to_string();
        self.filtered_average()
    }

    /// Average for the current query against the current dataset.
    pub fn filtered_average(&self) -> Option<f64> {
        aggregate::filtered_average(&self.dataset, &self.filter_query)
    }

    fn install_dataset(&mut self, records: Vec<ScoreRecord>) {
        self.chart = aggregate::country_averages(&records);
        self.dataset = records;
        self.state = ScreenState::Ready;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
