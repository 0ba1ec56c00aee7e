use chrono::{DateTime, Utc};

use crate::domain::{HealthStatus, ReviewError, ReviewRequest, ReviewResult, ReviewType};
use crate::infra::source::LoadedSource;

#[derive(Debug)]
pub enum Action {
    Draft(DraftAction),
    Review(ReviewAction),
    Service(ServiceAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum DraftAction {
    UpdateCode(String),
    UpdateFilename(String),
    SelectReviewType(ReviewType),
    /// Replaces the code with the built-in sample and clears the last outcome.
    LoadSample,
    /// Replaces code and filename with a loaded file and clears the last outcome.
    LoadSource(LoadedSource),
}

#[derive(Debug)]
pub enum ReviewAction {
    Submit(ReviewRequest),
    SubmitDraft,
    Reset,
    ClearHistory,
}

#[derive(Debug)]
pub enum ServiceAction {
    CheckHealth,
}

#[derive(Debug)]
pub enum AsyncAction {
    AnalysisFinished {
        request_id: u64,
        request: ReviewRequest,
        completed_at: DateTime<Utc>,
        result: Result<ReviewResult, ReviewError>,
    },
    HealthChecked(HealthStatus),
}
