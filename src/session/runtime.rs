use super::SessionStore;
use super::action::{Action, AsyncAction};
use super::command::Command;
use crate::domain::ReviewRequest;

pub fn run(store: &mut SessionStore, command: Command) {
    match command {
        Command::AnalyzeCode {
            request_id,
            request,
        } => analyze_code(store, request_id, request),
        Command::CheckHealth => check_health(store),
    }
}

fn analyze_code(store: &mut SessionStore, request_id: u64, request: ReviewRequest) {
    let transport = store.transport.clone();
    let action_tx = store.action_tx.clone();
    store.in_flight += 1;

    tokio::spawn(async move {
        let result = transport.analyze(&request).await;
        let _ = action_tx.send(Action::Async(AsyncAction::AnalysisFinished {
            request_id,
            request,
            completed_at: chrono::Utc::now(),
            result,
        }));
    });
}

fn check_health(store: &mut SessionStore) {
    let transport = store.transport.clone();
    let action_tx = store.action_tx.clone();
    store.in_flight += 1;

    tokio::spawn(async move {
        let status = transport.health().await;
        let _ = action_tx.send(Action::Async(AsyncAction::HealthChecked(status)));
    });
}
