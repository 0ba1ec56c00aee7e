use crate::domain::{
    DEFAULT_FILENAME, HealthStatus, ReviewHistory, ReviewRequest, ReviewResult, ReviewType,
};

/// What the user is about to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub code: String,
    pub filename: String,
    pub review_type: ReviewType,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            filename: DEFAULT_FILENAME.to_string(),
            review_type: ReviewType::default(),
        }
    }
}

impl ReviewDraft {
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    pub fn to_request(&self) -> ReviewRequest {
        ReviewRequest::new(self.code.clone(), self.filename.clone(), self.review_type)
    }
}

/// Outcome currently shown for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub draft: ReviewDraft,
    pub loading: bool,
    /// Mutually exclusive with `error`.
    pub result: Option<ReviewResult>,
    pub error: Option<String>,
    pub history: ReviewHistory,
    /// Id of the most recent submission. Responses carrying an older id are stale.
    pub latest_request: u64,
    pub health: Option<HealthStatus>,
    pub is_health_checking: bool,
}

impl SessionState {
    pub fn with_draft(draft: ReviewDraft) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Submitting
        } else if self.error.is_some() {
            SessionPhase::Failure
        } else if self.result.is_some() {
            SessionPhase::Success
        } else {
            SessionPhase::Idle
        }
    }
}
