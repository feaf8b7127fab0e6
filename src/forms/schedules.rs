use serde::Deserialize;
use validator::Validate;

use crate::domain::schedule::{NewSchedule, ScheduleStatus};
use crate::domain::types::ProposalId;
use crate::forms::{FormError, nullable_date, nullable_float, required_int, sanitized, status_or_default};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating a schedule.
pub struct AddScheduleForm {
    #[serde(rename = "proposta_id", default)]
    #[validate(length(min = 1))]
    pub proposal_id: String,
    #[serde(rename = "data_inicio", default)]
    pub starts_on: String,
    #[serde(rename = "data_termino", default)]
    pub ends_on: String,
    #[serde(rename = "horas_previstas", default)]
    pub planned_hours: String,
    #[serde(rename = "horas_executadas", default)]
    pub executed_hours: String,
    #[serde(rename = "percentual_conclusao", default)]
    pub completion: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}

impl TryFrom<AddScheduleForm> for NewSchedule {
    type Error = FormError;

    fn try_from(form: AddScheduleForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let proposal_id = ProposalId::new(required_int(&form.proposal_id, "proposta_id")?)
            .map_err(|_| FormError::InvalidId("proposta_id"))?;
        let labels = ScheduleStatus::ALL.map(ScheduleStatus::label);

        Ok(NewSchedule {
            proposal_id,
            starts_on: nullable_date(&form.starts_on),
            ends_on: nullable_date(&form.ends_on),
            planned_hours: nullable_float(&form.planned_hours),
            executed_hours: nullable_float(&form.executed_hours),
            completion: nullable_float(&form.completion),
            status: status_or_default(&form.status, &labels, ScheduleStatus::NotStarted.label())?,
            notes: sanitized(&form.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_numbers_become_null() {
        let schedule = NewSchedule::try_from(AddScheduleForm {
            proposal_id: "3".to_string(),
            planned_hours: "120".to_string(),
            executed_hours: "".to_string(),
            completion: "n/a".to_string(),
            status: "Em andamento".to_string(),
            ..AddScheduleForm::default()
        })
        .unwrap();

        assert_eq!(schedule.planned_hours, Some(120.0));
        assert_eq!(schedule.executed_hours, None);
        assert_eq!(schedule.completion, None);
        assert_eq!(schedule.status, "Em andamento");
        assert_eq!(schedule.starts_on, None);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = NewSchedule::try_from(AddScheduleForm {
            proposal_id: "3".to_string(),
            status: "Pausado".to_string(),
            ..AddScheduleForm::default()
        });

        assert!(matches!(result, Err(FormError::InvalidStatus(_))));
    }

    #[test]
    fn proposal_is_required() {
        assert!(matches!(
            NewSchedule::try_from(AddScheduleForm::default()),
            Err(FormError::Validation(_))
        ));
    }
}
