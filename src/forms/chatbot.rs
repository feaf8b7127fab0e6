use serde::Deserialize;

use crate::domain::chatbot::ChatQuestion;

#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    #[serde(rename = "pergunta", default)]
    pub question: String,
}

impl QuestionForm {
    /// `None` for blank input, which is not relayed.
    pub fn into_question(self) -> Option<ChatQuestion> {
        let message = self.question.trim();
        (!message.is_empty()).then(|| ChatQuestion {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_question_is_dropped() {
        let form = QuestionForm {
            question: "   ".to_string(),
        };
        assert_eq!(form.into_question(), None);
    }

    #[test]
    fn question_is_trimmed() {
        let form = QuestionForm {
            question: " Quais contratos vencem este mês? ".to_string(),
        };
        assert_eq!(
            form.into_question().map(|q| q.message).as_deref(),
            Some("Quais contratos vencem este mês?")
        );
    }
}
