use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::proposal::ProposalRef;
use crate::domain::types::{ContractId, ProposalId, decimal};

/// Payment lifecycle of a contract as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    Canceled,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Overdue,
        PaymentStatus::Canceled,
    ];

    /// Wire value used by the backend.
    pub const fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendente",
            PaymentStatus::Paid => "Pago",
            PaymentStatus::Overdue => "Vencido",
            PaymentStatus::Canceled => "Cancelado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == value)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: ContractId,
    #[serde(rename = "proposta_id")]
    pub proposal_id: ProposalId,
    #[serde(rename = "numero_contrato", default)]
    pub number: Option<String>,
    #[serde(rename = "data_assinatura", default)]
    pub signed_on: Option<NaiveDate>,
    #[serde(rename = "data_vencimento", default)]
    pub due_on: Option<NaiveDate>,
    #[serde(rename = "valor", default, deserialize_with = "decimal::deserialize")]
    pub value: Option<f64>,
    /// Raw payment status; see [`PaymentStatus::parse`].
    #[serde(rename = "status_pagamento", default)]
    pub payment_status: Option<String>,
    #[serde(rename = "observacao", default)]
    pub notes: Option<String>,
    /// Present only when the backend embeds the linked proposal.
    #[serde(rename = "proposta", default)]
    pub proposal: Option<ProposalRef>,
    #[serde(rename = "criado_em", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "atualizado_em", default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Contract {
    pub fn payment_status(&self) -> Option<PaymentStatus> {
        self.payment_status.as_deref().and_then(PaymentStatus::parse)
    }
}

/// Body of `POST contratos/`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewContract {
    #[serde(rename = "proposta_id")]
    pub proposal_id: ProposalId,
    #[serde(rename = "numero_contrato")]
    pub number: String,
    #[serde(rename = "data_assinatura")]
    pub signed_on: Option<NaiveDate>,
    #[serde(rename = "data_vencimento")]
    pub due_on: Option<NaiveDate>,
    #[serde(rename = "valor")]
    pub value: Option<f64>,
    #[serde(rename = "status_pagamento")]
    pub payment_status: String,
    #[serde(rename = "observacao")]
    pub notes: Option<String>,
}
