use super::super::action::AsyncAction;
use super::super::command::Command;
use super::super::state::SessionState;

pub fn reduce(state: &mut SessionState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::AnalysisFinished {
            request_id,
            request,
            completed_at,
            result,
        } => {
            if request_id != state.latest_request {
                log::debug!(
                    "Discarding stale review #{} (latest is #{})",
                    request_id,
                    state.latest_request
                );
                return Vec::new();
            }

            state.loading = false;
            match result {
                Ok(result) => {
                    state.history.record(
                        &request.filename,
                        request.review_type,
                        &result,
                        completed_at,
                    );
                    state.error = None;
                    state.result = Some(result);
                }
                Err(err) => {
                    state.result = None;
                    state.error = Some(err.to_string());
                }
            }
            Vec::new()
        }
        AsyncAction::HealthChecked(status) => {
            state.is_health_checking = false;
            state.health = Some(status);
            Vec::new()
        }
    }
}
