use actix_multipart::form::MultipartForm;
use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::domain::import::ImportKind;
use crate::forms::import::ImportUploadForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::import as import_service;
use crate::session::SessionContext;

#[derive(serde::Serialize)]
struct ImportCard {
    slug: &'static str,
    title: &'static str,
}

#[get("/importacao")]
pub async fn show_import(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);
    if !ctx.is_authenticated() {
        return HttpResponse::Unauthorized().finish();
    }

    let cards: Vec<ImportCard> = ImportKind::ALL
        .into_iter()
        .map(|kind| ImportCard {
            slug: kind.slug(),
            title: kind.title(),
        })
        .collect();

    let mut context = base_context(&flash_messages, ctx.profile().as_ref(), "importacao");
    context.insert("kinds", &cards);

    render_template(&tera, "import/index.html", &context)
}

#[post("/importacao/{kind}")]
pub async fn upload_import(
    kind: web::Path<String>,
    session: Session,
    backend: web::Data<HttpBackend>,
    MultipartForm(form): MultipartForm<ImportUploadForm>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);
    if !ctx.is_authenticated() {
        return HttpResponse::Unauthorized().finish();
    }

    let Ok(kind) = ImportKind::try_from(kind.as_str()) else {
        return HttpResponse::NotFound().finish();
    };

    let file = match form.into_file() {
        Ok(file) => file,
        Err(err) => {
            FlashMessage::warning(err.to_string()).send();
            return redirect("/importacao");
        }
    };

    match import_service::import_file(backend.get_ref(), &ctx, kind, file).await {
        Ok(outcome) if outcome.success => {
            FlashMessage::success(outcome.message).send();
            for warning in outcome.warnings {
                FlashMessage::warning(warning).send();
            }
        }
        Ok(outcome) => {
            FlashMessage::error(outcome.message).send();
            for warning in outcome.warnings {
                FlashMessage::warning(warning).send();
            }
        }
        Err(err) if err.is_auth() => return HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to import {kind}: {err}");
            FlashMessage::error("Erro ao processar arquivo").send();
        }
    }

    redirect("/importacao")
}
