//! Transport to the remote analysis service.

pub mod client;
pub mod traits;
pub mod wire;

pub use client::HttpReviewClient;
pub use traits::ReviewTransport;
