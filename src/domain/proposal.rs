use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyId, ConsultantId, ProposalId, decimal};

/// Sales lifecycle of a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    InProgress,
    Closed,
    Lost,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 3] = [
        ProposalStatus::InProgress,
        ProposalStatus::Closed,
        ProposalStatus::Lost,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ProposalStatus::InProgress => "Em andamento",
            ProposalStatus::Closed => "Fechado",
            ProposalStatus::Lost => "Perdido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == value)
    }
}

/// Minimal proposal reference embedded in contracts and schedules.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ProposalRef {
    #[serde(rename = "numero_proposta", default)]
    pub number: Option<String>,
}

/// Embedded `{ "nome": ... }` reference to a company or a consultant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NamedRef {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Proposal {
    pub id: ProposalId,
    #[serde(rename = "numero_proposta", default)]
    pub number: Option<String>,
    #[serde(rename = "empresa_id")]
    pub company_id: CompanyId,
    #[serde(rename = "consultor_id", default)]
    pub consultant_id: Option<ConsultantId>,
    #[serde(rename = "solucao", default)]
    pub solution: Option<String>,
    #[serde(rename = "data_contato", default)]
    pub contacted_on: Option<NaiveDate>,
    #[serde(rename = "data_proposta", default)]
    pub proposed_on: Option<NaiveDate>,
    #[serde(
        rename = "valor_proposta",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub value: Option<f64>,
    #[serde(rename = "data_fechamento", default)]
    pub closed_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "resultado", default)]
    pub outcome: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    #[serde(rename = "empresa", default)]
    pub company: Option<NamedRef>,
    #[serde(rename = "consultor", default)]
    pub consultant: Option<NamedRef>,
    #[serde(rename = "criado_em", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "atualizado_em", default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Proposal {
    pub fn status(&self) -> Option<ProposalStatus> {
        self.status.as_deref().and_then(ProposalStatus::parse)
    }
}

/// Body of `POST propostas/`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewProposal {
    #[serde(rename = "numero_proposta")]
    pub number: String,
    #[serde(rename = "empresa_id")]
    pub company_id: CompanyId,
    #[serde(rename = "consultor_id")]
    pub consultant_id: Option<ConsultantId>,
    #[serde(rename = "solucao")]
    pub solution: Option<String>,
    #[serde(rename = "valor_proposta")]
    pub value: Option<f64>,
    pub status: String,
}
