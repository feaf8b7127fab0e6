use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::domain::schedule::ScheduleStatus;
use crate::dto::DeleteOutcome;
use crate::forms::delete::DeleteForm;
use crate::forms::schedules::AddScheduleForm;
use crate::routes::{base_context, redirect, render_template, unauthorized};
use crate::services::schedules as schedules_service;
use crate::session::SessionContext;

#[get("/cronograma")]
pub async fn show_schedules(
    session: Session,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    let mut context = base_context(&flash_messages, ctx.profile().as_ref(), "cronograma");
    context.insert("statuses", &ScheduleStatus::ALL.map(ScheduleStatus::label));

    match schedules_service::list_schedules(backend.get_ref(), &ctx).await {
        Ok(data) => {
            context.insert("table", &data.table);
            context.insert("banner", &data.banner);
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to list schedules: {err}");
            context.insert("list_error", "Erro ao carregar cronogramas.");
        }
    }

    render_template(&tera, "schedules/index.html", &context)
}

#[post("/cronogramas/add")]
pub async fn add_schedule(
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<AddScheduleForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match schedules_service::add_schedule(backend.get_ref(), &ctx, form).await {
        Ok(()) => {
            FlashMessage::success("Cronograma criado com sucesso!").send();
            redirect("/cronograma")
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to create the schedule: {err}");
            FlashMessage::error(err.user_message()).send();
            redirect("/cronograma")
        }
    }
}

#[post("/cronogramas/{schedule_id}/delete")]
pub async fn delete_schedule(
    schedule_id: web::Path<i32>,
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<DeleteForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match schedules_service::delete_schedule(backend.get_ref(), &ctx, schedule_id.into_inner(), form)
        .await
    {
        Ok(DeleteOutcome::Deleted) => {
            FlashMessage::success("Cronograma excluído.").send();
            redirect("/cronograma")
        }
        Ok(DeleteOutcome::Declined) => redirect("/cronograma"),
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to delete the schedule: {err}");
            FlashMessage::error("Erro ao excluir cronograma").send();
            redirect("/cronograma")
        }
    }
}
