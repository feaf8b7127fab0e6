//! Companies and consultants, used to resolve names and fill form selects.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyId, ConsultantId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "segmento", default)]
    pub segment: Option<String>,
    #[serde(rename = "regiao", default)]
    pub region: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Consultant {
    pub id: ConsultantId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "cargo", default)]
    pub role: Option<String>,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
