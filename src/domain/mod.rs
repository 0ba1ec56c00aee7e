//! Domain types for critique
//! Defines the review requests, results and history records shared by the session store and transport.

pub mod error;
pub mod history;
pub mod review;

pub use error::*;
pub use history::*;
pub use review::*;
