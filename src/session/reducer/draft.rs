use super::super::action::DraftAction;
use super::super::command::Command;
use super::super::state::SessionState;
use super::review::clear_outcome;
use crate::infra::source::LoadedSource;

pub fn reduce(state: &mut SessionState, action: DraftAction) -> Vec<Command> {
    match action {
        DraftAction::UpdateCode(code) => {
            state.draft.code = code;
        }
        DraftAction::UpdateFilename(filename) => {
            state.draft.filename = filename;
        }
        DraftAction::SelectReviewType(review_type) => {
            state.draft.review_type = review_type;
        }
        DraftAction::LoadSample => {
            state.draft.code = LoadedSource::sample().code;
            clear_outcome(state);
        }
        DraftAction::LoadSource(source) => {
            state.draft.code = source.code;
            state.draft.filename = source.filename;
            clear_outcome(state);
        }
    }
    Vec::new()
}
