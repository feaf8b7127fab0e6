//! DTOs exchanged with the REST backend, passed through to the views unchanged.

pub mod analytics;
pub mod chatbot;
pub mod contract;
pub mod directory;
pub mod import;
pub mod proposal;
pub mod schedule;
pub mod types;
pub mod user;
