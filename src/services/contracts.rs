//! Contract list, creation and deletion.

use crate::backend::{ContractReader, ContractWriter, ListQuery};
use crate::domain::contract::NewContract;
use crate::domain::types::ContractId;
use crate::dto::{DeleteOutcome, ListPageData};
use crate::forms::contracts::AddContractForm;
use crate::forms::delete::DeleteForm;
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;
use crate::view::banner::AlertBanner;
use crate::view::contracts::CONTRACTS_TABLE;

/// Loads the contract table and the due-date banner.
///
/// The banner comes from a second, independent read; its failure is logged
/// and leaves the table untouched.
pub async fn list_contracts<R>(backend: &R, session: &SessionContext<'_>) -> ServiceResult<ListPageData>
where
    R: ContractReader + ?Sized,
{
    let token = session.token()?;

    let contracts = session.guard(backend.list_contracts(&token, ListQuery::default()).await)?;
    let table = CONTRACTS_TABLE.render(&contracts);

    let banner = match session.guard(backend.contract_alerts(&token).await) {
        Ok(alerts) => AlertBanner::contracts(alerts.len()),
        Err(ServiceError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::warn!("Failed to load contract alerts: {err}");
            None
        }
    };

    Ok(ListPageData { table, banner })
}

pub async fn add_contract<R>(
    backend: &R,
    session: &SessionContext<'_>,
    form: AddContractForm,
) -> ServiceResult<()>
where
    R: ContractWriter + ?Sized,
{
    let token = session.token()?;

    let contract = NewContract::try_from(form)?;

    session.guard(backend.create_contract(&token, &contract).await)?;

    Ok(())
}

pub async fn delete_contract<R>(
    backend: &R,
    session: &SessionContext<'_>,
    contract_id: i32,
    form: DeleteForm,
) -> ServiceResult<DeleteOutcome>
where
    R: ContractWriter + ?Sized,
{
    let token = session.token()?;

    if !form.is_confirmed() {
        return Ok(DeleteOutcome::Declined);
    }

    let contract_id = ContractId::new(contract_id)?;

    session.guard(backend.delete_contract(&token, contract_id).await)?;

    Ok(DeleteOutcome::Deleted)
}
