use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::domain::contract::PaymentStatus;
use crate::dto::DeleteOutcome;
use crate::forms::contracts::AddContractForm;
use crate::forms::delete::DeleteForm;
use crate::routes::{base_context, redirect, render_template, unauthorized};
use crate::services::contracts as contracts_service;
use crate::session::SessionContext;

#[get("/contratos")]
pub async fn show_contracts(
    session: Session,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    let mut context = base_context(&flash_messages, ctx.profile().as_ref(), "contratos");
    context.insert("statuses", &PaymentStatus::ALL.map(PaymentStatus::label));

    match contracts_service::list_contracts(backend.get_ref(), &ctx).await {
        Ok(data) => {
            context.insert("table", &data.table);
            context.insert("banner", &data.banner);
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to list contracts: {err}");
            context.insert("list_error", "Erro ao carregar contratos.");
        }
    }

    render_template(&tera, "contracts/index.html", &context)
}

#[post("/contratos/add")]
pub async fn add_contract(
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<AddContractForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match contracts_service::add_contract(backend.get_ref(), &ctx, form).await {
        Ok(()) => {
            FlashMessage::success("Contrato criado com sucesso!").send();
            redirect("/contratos")
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to create the contract: {err}");
            FlashMessage::error(err.user_message()).send();
            redirect("/contratos")
        }
    }
}

#[post("/contratos/{contract_id}/delete")]
pub async fn delete_contract(
    contract_id: web::Path<i32>,
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<DeleteForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match contracts_service::delete_contract(backend.get_ref(), &ctx, contract_id.into_inner(), form)
        .await
    {
        Ok(DeleteOutcome::Deleted) => {
            FlashMessage::success("Contrato excluído.").send();
            redirect("/contratos")
        }
        Ok(DeleteOutcome::Declined) => redirect("/contratos"),
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to delete the contract: {err}");
            FlashMessage::error("Erro ao excluir contrato").send();
            redirect("/contratos")
        }
    }
}
