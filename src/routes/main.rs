use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::forms::auth::LoginForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::auth as auth_service;
use crate::session::SessionContext;

/// Landing page doubling as the login form.
#[get("/")]
pub async fn show_login(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);
    if ctx.is_authenticated() {
        return redirect("/dashboard");
    }

    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "main/login.html", &context)
}

#[post("/login")]
pub async fn login(
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    match auth_service::login(backend.get_ref(), &ctx, form).await {
        Ok(_) => redirect("/dashboard"),
        Err(err) => {
            log::warn!("Login failed: {err}");
            FlashMessage::error(err.user_message()).send();
            redirect("/")
        }
    }
}

#[post("/logout")]
pub async fn logout(session: Session) -> impl Responder {
    let ctx = SessionContext::new(&session);
    auth_service::logout(&ctx);
    redirect("/")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
