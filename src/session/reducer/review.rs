use super::super::action::ReviewAction;
use super::super::command::Command;
use super::super::state::SessionState;
use crate::domain::{ReviewError, ReviewRequest};

pub fn reduce(state: &mut SessionState, action: ReviewAction) -> Vec<Command> {
    match action {
        ReviewAction::Submit(request) => submit(state, request),
        ReviewAction::SubmitDraft => {
            let request = state.draft.to_request();
            submit(state, request)
        }
        ReviewAction::Reset => {
            clear_outcome(state);
            Vec::new()
        }
        ReviewAction::ClearHistory => {
            state.history.clear();
            Vec::new()
        }
    }
}

/// Drops the shown result and error; leaves `loading` and history alone.
pub fn clear_outcome(state: &mut SessionState) {
    state.result = None;
    state.error = None;
}

fn submit(state: &mut SessionState, request: ReviewRequest) -> Vec<Command> {
    // Every submission supersedes whatever is still in flight, including a rejected one.
    state.latest_request += 1;
    state.result = None;

    if request.is_blank() {
        state.loading = false;
        state.error = Some(ReviewError::Validation.to_string());
        return Vec::new();
    }

    state.loading = true;
    state.error = None;
    log::debug!(
        "Submitting review #{} for {} ({})",
        state.latest_request,
        request.filename,
        request.review_type
    );
    vec![Command::AnalyzeCode {
        request_id: state.latest_request,
        request,
    }]
}
