//! Page data returned by services to the route handlers.

use crate::view::banner::AlertBanner;
use crate::view::table::TableView;

pub mod dashboard;
pub mod proposals;

/// A rendered entity list with its optional due-date banner.
#[derive(Debug, Clone)]
pub struct ListPageData {
    pub table: TableView,
    pub banner: Option<AlertBanner>,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation was declined; nothing was sent.
    Declined,
}
