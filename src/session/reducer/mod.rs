pub mod async_handler;
pub mod draft;
pub mod review;
pub mod service;

use super::action::Action;
use super::command::Command;
use super::state::SessionState;

pub fn reduce(state: &mut SessionState, action: Action) -> Vec<Command> {
    match action {
        Action::Draft(action) => draft::reduce(state, action),
        Action::Review(action) => review::reduce(state, action),
        Action::Service(action) => service::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
