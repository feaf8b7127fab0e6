use serde::Deserialize;
use validator::Validate;

use crate::domain::proposal::{NewProposal, ProposalStatus};
use crate::domain::types::{CompanyId, ConsultantId};
use crate::forms::{
    FormError, nullable_float, nullable_int, required_int, sanitized, status_or_default,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating a proposal.
pub struct AddProposalForm {
    #[serde(rename = "numero_proposta", default)]
    #[validate(length(min = 1, max = 50))]
    pub number: String,
    #[serde(rename = "empresa_id", default)]
    #[validate(length(min = 1))]
    pub company_id: String,
    #[serde(rename = "consultor_id", default)]
    pub consultant_id: String,
    #[serde(rename = "solucao", default)]
    pub solution: String,
    #[serde(rename = "valor_proposta", default)]
    pub value: String,
    #[serde(default)]
    pub status: String,
}

impl TryFrom<AddProposalForm> for NewProposal {
    type Error = FormError;

    fn try_from(form: AddProposalForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let company_id = CompanyId::new(required_int(&form.company_id, "empresa_id")?)
            .map_err(|_| FormError::InvalidId("empresa_id"))?;
        // An unselected consultant arrives as an empty option.
        let consultant_id = nullable_int(&form.consultant_id).and_then(|id| ConsultantId::new(id).ok());
        let labels = ProposalStatus::ALL.map(ProposalStatus::label);

        Ok(NewProposal {
            number: sanitized(&form.number).ok_or(FormError::InvalidNumber("numero_proposta"))?,
            company_id,
            consultant_id,
            solution: sanitized(&form.solution),
            value: nullable_float(&form.value),
            status: status_or_default(&form.status, &labels, ProposalStatus::InProgress.label())?,
        })
    }
}

/// Query string of the prospecting page filters.
#[derive(Debug, Default, Deserialize)]
pub struct ProposalFilterQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "busca", default)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_consultant_is_null() {
        let proposal = NewProposal::try_from(AddProposalForm {
            number: "P-2024-001".to_string(),
            company_id: "2".to_string(),
            consultant_id: "".to_string(),
            solution: "ERP".to_string(),
            value: "25000".to_string(),
            status: "".to_string(),
        })
        .unwrap();

        assert_eq!(proposal.company_id.get(), 2);
        assert_eq!(proposal.consultant_id, None);
        assert_eq!(proposal.value, Some(25000.0));
        assert_eq!(proposal.status, "Em andamento");
    }

    #[test]
    fn company_must_parse() {
        let result = NewProposal::try_from(AddProposalForm {
            number: "P-1".to_string(),
            company_id: "acme".to_string(),
            ..AddProposalForm::default()
        });

        assert!(matches!(result, Err(FormError::InvalidNumber("empresa_id"))));
    }
}
