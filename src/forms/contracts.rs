use serde::Deserialize;
use validator::Validate;

use crate::domain::contract::{NewContract, PaymentStatus};
use crate::domain::types::ProposalId;
use crate::forms::{FormError, nullable_date, nullable_float, required_int, sanitized, status_or_default};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating a contract.
pub struct AddContractForm {
    #[serde(rename = "proposta_id", default)]
    #[validate(length(min = 1))]
    pub proposal_id: String,
    #[serde(rename = "numero_contrato", default)]
    #[validate(length(min = 1, max = 50))]
    pub number: String,
    #[serde(rename = "data_assinatura", default)]
    pub signed_on: String,
    #[serde(rename = "data_vencimento", default)]
    pub due_on: String,
    #[serde(rename = "valor", default)]
    pub value: String,
    #[serde(rename = "status_pagamento", default)]
    pub payment_status: String,
    #[serde(rename = "observacao", default)]
    pub notes: String,
}

impl TryFrom<AddContractForm> for NewContract {
    type Error = FormError;

    fn try_from(form: AddContractForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let proposal_id = ProposalId::new(required_int(&form.proposal_id, "proposta_id")?)
            .map_err(|_| FormError::InvalidId("proposta_id"))?;
        let labels = PaymentStatus::ALL.map(PaymentStatus::label);

        Ok(NewContract {
            proposal_id,
            number: sanitized(&form.number).ok_or(FormError::InvalidNumber("numero_contrato"))?,
            signed_on: nullable_date(&form.signed_on),
            due_on: nullable_date(&form.due_on),
            value: nullable_float(&form.value),
            payment_status: status_or_default(
                &form.payment_status,
                &labels,
                PaymentStatus::Pending.label(),
            )?,
            notes: sanitized(&form.notes),
        })
    }
}
