use crate::backend::ChatbotRelay;
use crate::forms::chatbot::QuestionForm;
use crate::services::ServiceResult;
use crate::session::SessionContext;
use crate::view::chatbot::ChatAnswerView;

/// Relays the question verbatim. Blank input returns `Ok(None)` without a
/// request.
pub async fn ask<R>(
    backend: &R,
    session: &SessionContext<'_>,
    form: QuestionForm,
) -> ServiceResult<Option<ChatAnswerView>>
where
    R: ChatbotRelay + ?Sized,
{
    let token = session.token()?;

    let Some(question) = form.into_question() else {
        return Ok(None);
    };

    let answer = session.guard(backend.ask(&token, &question).await)?;

    Ok(Some(ChatAnswerView::from(answer)))
}
