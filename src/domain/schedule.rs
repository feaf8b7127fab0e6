use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::proposal::ProposalRef;
use crate::domain::types::{ProposalId, ScheduleId, decimal};

/// Execution status of a schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    NotStarted,
    InProgress,
    Completed,
    Late,
}

impl ScheduleStatus {
    pub const ALL: [ScheduleStatus; 4] = [
        ScheduleStatus::NotStarted,
        ScheduleStatus::InProgress,
        ScheduleStatus::Completed,
        ScheduleStatus::Late,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScheduleStatus::NotStarted => "Não iniciado",
            ScheduleStatus::InProgress => "Em andamento",
            ScheduleStatus::Completed => "Concluído",
            ScheduleStatus::Late => "Atrasado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == value)
    }
}

/// Planned vs. executed time tracking for a proposal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub id: ScheduleId,
    #[serde(rename = "proposta_id")]
    pub proposal_id: ProposalId,
    #[serde(rename = "data_inicio", default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(rename = "data_termino", default)]
    pub ends_on: Option<NaiveDate>,
    #[serde(
        rename = "horas_previstas",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub planned_hours: Option<f64>,
    #[serde(
        rename = "horas_executadas",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub executed_hours: Option<f64>,
    #[serde(
        rename = "percentual_conclusao",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub completion: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    #[serde(rename = "proposta", default)]
    pub proposal: Option<ProposalRef>,
    #[serde(rename = "criado_em", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "atualizado_em", default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Schedule {
    pub fn status(&self) -> Option<ScheduleStatus> {
        self.status.as_deref().and_then(ScheduleStatus::parse)
    }
}

/// Body of `POST cronogramas/`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewSchedule {
    #[serde(rename = "proposta_id")]
    pub proposal_id: ProposalId,
    #[serde(rename = "data_inicio")]
    pub starts_on: Option<NaiveDate>,
    #[serde(rename = "data_termino")]
    pub ends_on: Option<NaiveDate>,
    #[serde(rename = "horas_previstas")]
    pub planned_hours: Option<f64>,
    #[serde(rename = "horas_executadas")]
    pub executed_hours: Option<f64>,
    #[serde(rename = "percentual_conclusao")]
    pub completion: Option<f64>,
    pub status: String,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}
