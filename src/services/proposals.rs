//! Prospecting page: filtered proposal list and proposal creation.

use crate::backend::{
    DirectoryReader, ListQuery, OPTION_LIMIT, ProposalReader, ProposalWriter,
};
use crate::domain::proposal::NewProposal;
use crate::domain::types::ProposalId;
use crate::dto::DeleteOutcome;
use crate::dto::proposals::{ProposalFilter, ProposalsPageData};
use crate::forms::delete::DeleteForm;
use crate::forms::proposals::{AddProposalForm, ProposalFilterQuery};
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;
use crate::view::proposals::{PROPOSALS_TABLE, filter_proposals, resolve_names};

/// Loads proposals filtered by status on the backend and by the search text
/// locally, plus the select options of the create form.
pub async fn list_proposals<R>(
    backend: &R,
    session: &SessionContext<'_>,
    query: ProposalFilterQuery,
) -> ServiceResult<ProposalsPageData>
where
    R: ProposalReader + DirectoryReader + ?Sized,
{
    let token = session.token()?;

    let filter = ProposalFilter {
        status: query.status.unwrap_or_default().trim().to_string(),
        search: query.search.unwrap_or_default().trim().to_string(),
    };

    let proposals = session.guard(
        backend
            .list_proposals(&token, ListQuery::default().status(filter.status.as_str()))
            .await,
    )?;

    let companies = match session.guard(
        backend
            .list_companies(&token, ListQuery::new(OPTION_LIMIT))
            .await,
    ) {
        Ok(companies) => companies,
        Err(ServiceError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::warn!("Failed to load companies: {err}");
            Vec::new()
        }
    };

    let consultants = match session.guard(
        backend
            .list_consultants(&token, ListQuery::new(OPTION_LIMIT))
            .await,
    ) {
        Ok(consultants) => consultants,
        Err(ServiceError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::warn!("Failed to load consultants: {err}");
            Vec::new()
        }
    };

    let lines = resolve_names(proposals, &companies, &consultants);
    let lines = filter_proposals(lines, Some(&filter.status), Some(&filter.search));
    let table = PROPOSALS_TABLE.render(&lines);

    Ok(ProposalsPageData {
        table,
        filter,
        companies,
        consultants,
    })
}

pub async fn add_proposal<R>(
    backend: &R,
    session: &SessionContext<'_>,
    form: AddProposalForm,
) -> ServiceResult<()>
where
    R: ProposalWriter + ?Sized,
{
    let token = session.token()?;

    let proposal = NewProposal::try_from(form)?;

    session.guard(backend.create_proposal(&token, &proposal).await)?;

    Ok(())
}

pub async fn delete_proposal<R>(
    backend: &R,
    session: &SessionContext<'_>,
    proposal_id: i32,
    form: DeleteForm,
) -> ServiceResult<DeleteOutcome>
where
    R: ProposalWriter + ?Sized,
{
    let token = session.token()?;

    if !form.is_confirmed() {
        return Ok(DeleteOutcome::Declined);
    }

    let proposal_id = ProposalId::new(proposal_id)?;

    session.guard(backend.delete_proposal(&token, proposal_id).await)?;

    Ok(DeleteOutcome::Deleted)
}
