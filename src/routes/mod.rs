//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::HttpResponse;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::user::UserProfile;
use crate::services::ServiceError;

pub mod chatbot;
pub mod contracts;
pub mod dashboard;
pub mod import;
pub mod main;
pub mod proposals;
pub mod schedules;

#[derive(Serialize)]
struct Alert<'a> {
    message: &'a str,
    level: &'static str,
}

/// Maps a flash level to the Bootstrap alert modifier.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context every page starts from: flash alerts, the signed-in user and the
/// active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&UserProfile>,
    current_page: &str,
) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            message: message.content(),
            level: alert_level_to_str(&message.level()),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 401 for auth failures, which the middleware turns into a redirect to the
/// login page. Other errors are left to the caller.
pub fn unauthorized(err: &ServiceError) -> Option<HttpResponse> {
    err.is_auth().then(|| HttpResponse::Unauthorized().finish())
}
