use actix_session::Session;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::routes::{base_context, render_template, unauthorized};
use crate::services::dashboard as dashboard_service;
use crate::session::SessionContext;

#[get("/dashboard")]
pub async fn show_dashboard(
    session: Session,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    let mut context = base_context(&flash_messages, ctx.profile().as_ref(), "dashboard");

    match dashboard_service::load_dashboard(backend.get_ref(), &ctx).await {
        Ok(data) => {
            context.insert("kpis", &data.kpis);
            context.insert("charts", &data.charts);
        }
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to load the dashboard: {err}");
            context.insert("charts", &Vec::<()>::new());
        }
    }

    render_template(&tera, "dashboard/index.html", &context)
}
