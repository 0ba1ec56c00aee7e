//! Review session store: reducer-style state updates + side-effect commands.
//!
//! All state lives in [`SessionState`] and changes only through [`SessionStore::dispatch`].
//! Network calls run as tokio tasks and report back over a channel; their results are
//! applied when the owner calls [`SessionStore::poll`] or [`SessionStore::settle`].

mod action;
mod command;
mod reducer;
mod runtime;
mod state;


pub use action::{Action, AsyncAction, DraftAction, ReviewAction, ServiceAction};
pub use command::Command;
pub use state::{ReviewDraft, SessionPhase, SessionState};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::{ReviewRequest, ReviewType};
use crate::infra::api::ReviewTransport;
use crate::infra::source::LoadedSource;

pub struct SessionStore {
    state: SessionState,
    transport: Arc<dyn ReviewTransport>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Spawned calls that have not reported back yet.
    in_flight: usize,
}

impl SessionStore {
    pub fn new(transport: Arc<dyn ReviewTransport>) -> Self {
        Self::with_draft(transport, ReviewDraft::default())
    }

    pub fn with_draft(transport: Arc<dyn ReviewTransport>, draft: ReviewDraft) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::with_draft(draft),
            transport,
            action_tx,
            action_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }

    pub fn submit(
        &mut self,
        code: impl Into<String>,
        filename: impl Into<String>,
        review_type: ReviewType,
    ) {
        self.dispatch(Action::Review(ReviewAction::Submit(ReviewRequest::new(
            code,
            filename,
            review_type,
        ))));
    }

    pub fn submit_draft(&mut self) {
        self.dispatch(Action::Review(ReviewAction::SubmitDraft));
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Review(ReviewAction::Reset));
    }

    pub fn clear_history(&mut self) {
        self.dispatch(Action::Review(ReviewAction::ClearHistory));
    }

    pub fn update_code(&mut self, code: impl Into<String>) {
        self.dispatch(Action::Draft(DraftAction::UpdateCode(code.into())));
    }

    pub fn update_filename(&mut self, filename: impl Into<String>) {
        self.dispatch(Action::Draft(DraftAction::UpdateFilename(filename.into())));
    }

    pub fn select_review_type(&mut self, review_type: ReviewType) {
        self.dispatch(Action::Draft(DraftAction::SelectReviewType(review_type)));
    }

    pub fn load_sample(&mut self) {
        self.dispatch(Action::Draft(DraftAction::LoadSample));
    }

    pub fn load_source(&mut self, source: LoadedSource) {
        self.dispatch(Action::Draft(DraftAction::LoadSource(source)));
    }

    pub fn check_health(&mut self) {
        self.dispatch(Action::Service(ServiceAction::CheckHealth));
    }

    /// Applies every result that has already arrived. Returns whether anything changed.
    pub fn poll(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits for the next spawned call to report back and applies it.
    /// Returns `false` when nothing is in flight.
    pub async fn next_settled(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.action_rx.recv().await {
            Some(action) => {
                self.in_flight -= 1;
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Waits until every spawned call has reported back.
    pub async fn settle(&mut self) {
        while self.next_settled().await {}
    }
}
