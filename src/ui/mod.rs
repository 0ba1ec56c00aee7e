//! Terminal presentation: renders session snapshots and feeds user input back to the store.

pub mod render;
pub mod shell;
