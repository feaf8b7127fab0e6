//! Schedule list, creation and deletion.

use crate::backend::{ListQuery, ScheduleReader, ScheduleWriter};
use crate::domain::schedule::NewSchedule;
use crate::domain::types::ScheduleId;
use crate::dto::{DeleteOutcome, ListPageData};
use crate::forms::delete::DeleteForm;
use crate::forms::schedules::AddScheduleForm;
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;
use crate::view::banner::AlertBanner;
use crate::view::schedules::SCHEDULES_TABLE;

/// Loads the schedule table and the late-schedule banner.
pub async fn list_schedules<R>(backend: &R, session: &SessionContext<'_>) -> ServiceResult<ListPageData>
where
    R: ScheduleReader + ?Sized,
{
    let token = session.token()?;

    let schedules = session.guard(backend.list_schedules(&token, ListQuery::default()).await)?;
    let table = SCHEDULES_TABLE.render(&schedules);

    let banner = match session.guard(backend.schedule_alerts(&token).await) {
        Ok(alerts) => AlertBanner::schedules(alerts.len()),
        Err(ServiceError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::warn!("Failed to load schedule alerts: {err}");
            None
        }
    };

    Ok(ListPageData { table, banner })
}

pub async fn add_schedule<R>(
    backend: &R,
    session: &SessionContext<'_>,
    form: AddScheduleForm,
) -> ServiceResult<()>
where
    R: ScheduleWriter + ?Sized,
{
    let token = session.token()?;

    let schedule = NewSchedule::try_from(form)?;

    session.guard(backend.create_schedule(&token, &schedule).await)?;

    Ok(())
}

pub async fn delete_schedule<R>(
    backend: &R,
    session: &SessionContext<'_>,
    schedule_id: i32,
    form: DeleteForm,
) -> ServiceResult<DeleteOutcome>
where
    R: ScheduleWriter + ?Sized,
{
    let token = session.token()?;

    if !form.is_confirmed() {
        return Ok(DeleteOutcome::Declined);
    }

    let schedule_id = ScheduleId::new(schedule_id)?;

    session.guard(backend.delete_schedule(&token, schedule_id).await)?;

    Ok(DeleteOutcome::Deleted)
}
