use actix_session::Session;
use actix_web::{HttpResponse, Responder, post, web};
use tera::{Context, Tera};

use crate::backend::http::HttpBackend;
use crate::forms::chatbot::QuestionForm;
use crate::routes::{render_template, unauthorized};
use crate::services::chatbot as chatbot_service;
use crate::session::SessionContext;
use crate::view::chatbot::CHAT_ERROR;

/// Answers with an HTML fragment the dashboard script swaps into the chat box.
#[post("/chatbot/perguntar")]
pub async fn ask_question(
    session: Session,
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<QuestionForm>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let ctx = SessionContext::new(&session);

    let mut context = Context::new();
    match chatbot_service::ask(backend.get_ref(), &ctx, form).await {
        Ok(None) => return HttpResponse::NoContent().finish(),
        Ok(Some(answer)) => context.insert("answer", &answer),
        Err(err) => {
            if let Some(response) = unauthorized(&err) {
                return response;
            }
            log::error!("Failed to relay the question: {err}");
            context.insert("error", CHAT_ERROR);
        }
    }

    render_template(&tera, "chatbot/answer.html", &context)
}
