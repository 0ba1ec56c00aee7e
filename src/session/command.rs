use crate::domain::ReviewRequest;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AnalyzeCode {
        request_id: u64,
        request: ReviewRequest,
    },
    CheckHealth,
}
