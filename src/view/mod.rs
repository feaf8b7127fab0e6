//! Pure view models handed to the tera templates.

pub mod banner;
pub mod chatbot;
pub mod contracts;
pub mod dashboard;
pub mod format;
pub mod import;
pub mod proposals;
pub mod schedules;
pub mod table;
