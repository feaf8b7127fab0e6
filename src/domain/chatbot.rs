//! Question/answer payloads of the `chatbot/perguntar` endpoint.
//!
//! The backend interprets the text; nothing here inspects it.

use serde::{Deserialize, Serialize};

use crate::domain::types::decimal;

/// Request body. The backend expects the free text under `mensagem`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ChatQuestion {
    #[serde(rename = "mensagem")]
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatAnswer {
    #[serde(rename = "resposta")]
    pub answer: String,
    #[serde(rename = "dados", default)]
    pub data: Option<ChatData>,
}

/// Optional structured lists attached to an answer. Other keys are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatData {
    #[serde(rename = "contratos", default)]
    pub contracts: Vec<ContractDigest>,
    #[serde(rename = "projetos", default)]
    pub projects: Vec<ProjectDigest>,
    #[serde(rename = "propostas", default)]
    pub stalled_proposals: Vec<StalledProposalDigest>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContractDigest {
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "empresa", default)]
    pub company: Option<String>,
    #[serde(rename = "vencimento", default)]
    pub due_on: Option<String>,
    #[serde(rename = "valor", default, deserialize_with = "decimal::deserialize")]
    pub value: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectDigest {
    #[serde(rename = "numero_proposta", default)]
    pub proposal_number: Option<String>,
    #[serde(rename = "empresa", default)]
    pub company: Option<String>,
    #[serde(
        rename = "percentual",
        default,
        deserialize_with = "decimal::deserialize"
    )]
    pub completion: Option<f64>,
    #[serde(rename = "termino_previsto", default)]
    pub expected_end: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StalledProposalDigest {
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "empresa", default)]
    pub company: Option<String>,
    #[serde(rename = "consultor", default)]
    pub consultant: Option<String>,
    #[serde(rename = "dias_parada", default)]
    pub idle_days: i64,
}
