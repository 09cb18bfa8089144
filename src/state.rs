use std::time::{Duration, Instant};

use crate::data::loader::LoadError;
use crate::data::model::Dataset;

/// Fixed duration of the simulated forecasting analysis.
pub const ANALYSIS_DURATION: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// Analysis lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of the simulated analysis. The timer is not cancellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// No analysis started for the current dataset.
    Idle,
    /// The fixed-duration timer is counting down.
    Running { deadline: Instant },
    /// The timer expired and the completion notice fired.
    Complete,
}

// ---------------------------------------------------------------------------
// Status notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient user-facing notification shown in the top bar.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Info, text: text.into() }
    }

    fn error(text: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Owned by the single app
/// controller; every upload replaces the dataset wholesale.
pub struct AppState {
    /// Loaded dataset (None until a file is accepted).
    pub dataset: Option<Dataset>,

    /// Where the simulated analysis currently stands.
    pub analysis: AnalysisPhase,

    /// Status / error message shown in the UI.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            analysis: AnalysisPhase::Idle,
            notice: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset. The previous dataset and any pending
    /// analysis are dropped together.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.notice = Some(Notice::info(format!(
            "File uploaded successfully: {} ({} data points ready for analysis)",
            dataset.file_name,
            dataset.len()
        )));
        self.analysis = AnalysisPhase::Idle;
        self.dataset = Some(dataset);
    }

    /// Record a failed upload. The existing dataset stays as it was.
    pub fn report_load_error(&mut self, err: &LoadError) {
        self.notice = Some(Notice::error(err.to_string()));
    }

    /// Kick off the simulated analysis timer.
    pub fn start_analysis(&mut self, now: Instant) {
        if self.dataset.is_some() && !self.is_analyzing() {
            self.analysis = AnalysisPhase::Running {
                deadline: now + ANALYSIS_DURATION,
            };
        }
    }

    /// Advance the analysis timer. Returns true when the analysis finished
    /// on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let AnalysisPhase::Running { deadline } = self.analysis {
            if now >= deadline {
                self.analysis = AnalysisPhase::Complete;
                self.notice = Some(Notice::info(
                    "Analysis complete: all forecasting models have been applied to your data",
                ));
                return true;
            }
        }
        false
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.analysis, AnalysisPhase::Running { .. })
    }

    /// The comparison panel is shown whenever data is loaded and no analysis
    /// is in flight.
    pub fn metrics_visible(&self) -> bool {
        self.dataset.is_some() && !self.is_analyzing()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    #[test]
    fn upload_replaces_dataset_and_resets_analysis() {
        let mut state = AppState::default();
        state.set_dataset(parse_csv("a\n1\n", "first.csv").unwrap());
        state.analysis = AnalysisPhase::Complete;

        state.set_dataset(parse_csv("b\n2\n3\n", "second.csv").unwrap());
        let ds = state.dataset.as_ref().unwrap();
        assert_eq!(ds.file_name, "second.csv");
        assert_eq!(ds.len(), 2);
        assert_eq!(state.analysis, AnalysisPhase::Idle);
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn failed_upload_leaves_existing_dataset_untouched() {
        let mut state = AppState::default();
        state.set_dataset(parse_csv("a\n1\n", "kept.csv").unwrap());

        let err = parse_csv("a\n", "empty.csv").unwrap_err();
        state.report_load_error(&err);

        assert_eq!(state.dataset.as_ref().unwrap().file_name, "kept.csv");
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn analysis_completes_once_the_deadline_passes() {
        let mut state = AppState::default();
        state.set_dataset(parse_csv("a\n1\n", "t.csv").unwrap());

        let start = Instant::now();
        state.start_analysis(start);
        assert!(state.is_analyzing());
        assert!(!state.metrics_visible());

        assert!(!state.tick(start));
        assert!(state.tick(start + ANALYSIS_DURATION));
        assert_eq!(state.analysis, AnalysisPhase::Complete);
        assert!(state.metrics_visible());
    }

    #[test]
    fn analysis_requires_a_dataset() {
        let mut state = AppState::default();
        state.start_analysis(Instant::now());
        assert_eq!(state.analysis, AnalysisPhase::Idle);
    }
}
