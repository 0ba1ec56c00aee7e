pub mod domain;
pub mod infra;
pub mod session;
pub mod ui;
