use serde::Serialize;

use crate::domain::directory::{Company, Consultant};
use crate::view::table::TableView;

/// Current values of the prospecting filters, echoed back into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProposalFilter {
    pub status: String,
    pub search: String,
}

#[derive(Debug, Clone)]
pub struct ProposalsPageData {
    pub table: TableView,
    pub filter: ProposalFilter,
    /// Select options of the create form; empty when their fetch failed.
    pub companies: Vec<Company>,
    pub consultants: Vec<Consultant>,
}
