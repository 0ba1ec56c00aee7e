//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (HTTP transport, config files, source loading).

pub mod api;
pub mod app_config;
pub mod source;
