//! Server-computed BI aggregates consumed read-only by the dashboard.

use serde::{Deserialize, Serialize};

use crate::domain::types::decimal;

/// Headline figures returned by `bi/dashboard`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSummary {
    #[serde(rename = "total_propostas", default)]
    pub total_proposals: u64,
    #[serde(rename = "propostas_ativas", default)]
    pub active_proposals: u64,
    #[serde(rename = "propostas_fechadas_mes", default)]
    pub closed_this_month: u64,
    #[serde(rename = "projetos_concluidos_mes", default)]
    pub projects_completed_this_month: u64,
    #[serde(
        rename = "total_horas_executadas",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub executed_hours: Option<f64>,
    #[serde(
        rename = "receita_total",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub total_revenue: Option<f64>,
    #[serde(
        rename = "receita_mes",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub revenue_this_month: Option<f64>,
    #[serde(
        rename = "taxa_conversao",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub conversion_rate: Option<f64>,
    #[serde(rename = "contratos_vencidos", default)]
    pub overdue_contracts: u64,
}

/// One slice of `bi/propostas-por-status`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusCount {
    #[serde(default)]
    pub status: Option<String>,
    pub total: u64,
}

/// One bar of `bi/receita-mensal`; `month` is preformatted as `Jan/2024`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "receita", default, deserialize_with = "decimal::deserialize")]
    pub revenue: Option<f64>,
}

/// One bar of `bi/propostas-por-consultor`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConsultantProposals {
    #[serde(rename = "consultor")]
    pub consultant: String,
    pub total: u64,
}

/// One bar of `bi/produtividade-consultores`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConsultantHours {
    #[serde(rename = "consultor")]
    pub consultant: String,
    #[serde(rename = "horas", default, deserialize_with = "decimal::deserialize")]
    pub hours: Option<f64>,
}
