use crate::view::dashboard::{ChartView, KpiView};

#[derive(Debug, Clone, Default)]
pub struct DashboardPageData {
    /// `None` when the summary endpoint failed.
    pub kpis: Option<KpiView>,
    /// Either all four charts or none.
    pub charts: Vec<ChartView>,
}
