use super::super::action::ServiceAction;
use super::super::command::Command;
use super::super::state::SessionState;

pub fn reduce(state: &mut SessionState, action: ServiceAction) -> Vec<Command> {
    match action {
        ServiceAction::CheckHealth => {
            if state.is_health_checking {
                return Vec::new();
            }
            state.is_health_checking = true;
            vec![Command::CheckHealth]
        }
    }
}
