//! KPI cards and chart series for the BI dashboard.
//!
//! Chart drawing happens in the browser; this module only shapes the label
//! and value arrays the template hands to Plotly.

use serde::Serialize;

use crate::domain::analytics::{
    ConsultantHours, ConsultantProposals, DashboardSummary, MonthlyRevenue, StatusCount,
};
use crate::view::format::{format_decimal, format_money};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KpiView {
    pub active_proposals: String,
    pub closed_this_month: String,
    pub conversion_rate: String,
    pub revenue_this_month: String,
    pub total_proposals: String,
    pub total_revenue: String,
    pub executed_hours: String,
    pub projects_completed_this_month: String,
    pub overdue_contracts: String,
}

impl From<&DashboardSummary> for KpiView {
    fn from(summary: &DashboardSummary) -> Self {
        Self {
            active_proposals: summary.active_proposals.to_string(),
            closed_this_month: summary.closed_this_month.to_string(),
            conversion_rate: format!("{}%", format_decimal(summary.conversion_rate)),
            revenue_this_month: format_money(summary.revenue_this_month),
            total_proposals: summary.total_proposals.to_string(),
            total_revenue: format_money(summary.total_revenue),
            executed_hours: format!("{}h", format_decimal(summary.executed_hours)),
            projects_completed_this_month: summary.projects_completed_this_month.to_string(),
            overdue_contracts: summary.overdue_contracts.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartView {
    /// DOM id of the chart container.
    pub element_id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: &'static str,
    pub hover_template: Option<&'static str>,
}

/// The four aggregate series, fetched together.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashboardSeries {
    pub by_status: Vec<StatusCount>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub by_consultant: Vec<ConsultantProposals>,
    pub productivity: Vec<ConsultantHours>,
}

/// Builds one chart per aggregate; every chart's labels and values line up.
pub fn build_charts(series: &DashboardSeries) -> Vec<ChartView> {
    vec![
        ChartView {
            element_id: "graficoPropostaStatus",
            title: "Propostas por status",
            kind: ChartKind::Pie,
            labels: series
                .by_status
                .iter()
                .map(|s| s.status.clone().unwrap_or_else(|| "Sem status".to_string()))
                .collect(),
            values: series.by_status.iter().map(|s| s.total as f64).collect(),
            color: "#3b82f6",
            hover_template: None,
        },
        ChartView {
            element_id: "graficoReceitaMensal",
            title: "Receita mensal",
            kind: ChartKind::Bar,
            labels: series.monthly_revenue.iter().map(|r| r.month.clone()).collect(),
            values: series
                .monthly_revenue
                .iter()
                .map(|r| r.revenue.unwrap_or(0.0))
                .collect(),
            color: "#3b82f6",
            hover_template: Some("R$ %{y:,.2f}<extra></extra>"),
        },
        ChartView {
            element_id: "graficoConsultor",
            title: "Propostas por consultor",
            kind: ChartKind::Bar,
            labels: series
                .by_consultant
                .iter()
                .map(|c| c.consultant.clone())
                .collect(),
            values: series.by_consultant.iter().map(|c| c.total as f64).collect(),
            color: "#10b981",
            hover_template: Some("%{y} propostas<extra></extra>"),
        },
        ChartView {
            element_id: "graficoProdutividade",
            title: "Produtividade (horas)",
            kind: ChartKind::Bar,
            labels: series
                .productivity
                .iter()
                .map(|p| p.consultant.clone())
                .collect(),
            values: series
                .productivity
                .iter()
                .map(|p| p.hours.unwrap_or(0.0))
                .collect(),
            color: "#f59e0b",
            hover_template: Some("%{y} horas<extra></extra>"),
        },
    ]
}
