use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::domain::proposal::ProposalStatus;
use crate::dto::DeleteOutcome;
use crate::dto::proposals::ProposalFilter;
use crate::forms::delete::DeleteForm;
use crate::forms::proposals::{AddProposalForm, ProposalFilterQuery};
use crate::routes::{base_context, redirect, render_template, unauthorized};
use crate::services::proposals as proposals_service;
use crate::session::SessionContext;

#[get("/prospeccao")]
pub async fn show_proposals(
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Query(query): web::Query<ProposalFilterQuery>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    let mut context = base_context(&flash_messages, ctx.profile().as_ref(), "prospeccao");
    context.insert("statuses", &ProposalStatus::ALL.map(ProposalStatus::label));
    context.insert("filter", &ProposalFilter::default());

    match proposals_service::list_proposals(backend.get_ref(), &ctx, query).await {
        Ok(data) => {
            context.insert("table", &data.table);
            context.insert("filter", &data.filter);
            context.insert("companies", &data.companies);
            context.insert("consultants", &data.consultants);
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to list proposals: {err}");
            context.insert("list_error", "Erro ao carregar propostas.");
        }
    }

    render_template(&tera, "proposals/index.html", &context)
}

#[post("/propostas/add")]
pub async fn add_proposal(
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<AddProposalForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match proposals_service::add_proposal(backend.get_ref(), &ctx, form).await {
        Ok(()) => {
            FlashMessage::success("Proposta criada com sucesso!").send();
            redirect("/prospeccao")
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to create the proposal: {err}");
            FlashMessage::error(err.user_message()).send();
            redirect("/prospeccao")
        }
    }
}

#[post("/propostas/{proposal_id}/delete")]
pub async fn delete_proposal(
    proposal_id: web::Path<i32>,
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<DeleteForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match proposals_service::delete_proposal(backend.get_ref(), &ctx, proposal_id.into_inner(), form)
        .await
    {
        Ok(DeleteOutcome::Deleted) => {
            FlashMessage::success("Proposta excluída.").send();
            redirect("/prospeccao")
        }
        Ok(DeleteOutcome::Declined) => redirect("/prospeccao"),
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to delete the proposal: {err}");
            FlashMessage::error("Erro ao excluir proposta").send();
            redirect("/prospeccao")
        }
    }
}
