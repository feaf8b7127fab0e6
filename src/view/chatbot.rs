//! Answer fragment for the natural-language query box.

use serde::Serialize;

use crate::domain::chatbot::ChatAnswer;
use crate::view::format::{format_decimal, format_money, text_or_missing};

pub const CHAT_ERROR: &str = "Erro ao processar pergunta. Tente novamente.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Default)]
pub struct ChatAnswerView {
    pub answer: String,
    pub contracts: Vec<String>,
    pub projects: Vec<String>,
    pub stalled_proposals: Vec<String>,
}

impl From<ChatAnswer> for ChatAnswerView {
    fn from(answer: ChatAnswer) -> Self {
        let data = answer.data.unwrap_or_default();

        let contracts = data
            .contracts
            .iter()
            .map(|c| {
                format!(
                    "{} - {} - Vencimento: {} - {}",
                    text_or_missing(c.number.as_deref()),
                    text_or_missing(c.company.as_deref()),
                    text_or_missing(c.due_on.as_deref()),
                    format_money(c.value),
                )
            })
            .collect();

        let projects = data
            .projects
            .iter()
            .map(|p| {
                format!(
                    "{} - {} - {}% concluído",
                    text_or_missing(p.proposal_number.as_deref()),
                    text_or_missing(p.company.as_deref()),
                    format_decimal(p.completion),
                )
            })
            .collect();

        let stalled_proposals = data
            .stalled_proposals
            .iter()
            .map(|p| {
                format!(
                    "{} - {} - {} - {} dia(s) sem movimentação",
                    text_or_missing(p.number.as_deref()),
                    text_or_missing(p.company.as_deref()),
                    text_or_missing(p.consultant.as_deref()),
                    p.idle_days,
                )
            })
            .collect();

        Self {
            answer: answer.answer,
            contracts,
            projects,
            stalled_proposals,
        }
    }
}
