use std::collections::HashMap;

use serde::Serialize;

use crate::domain::directory::{Company, Consultant};
use crate::domain::proposal::{Proposal, ProposalStatus};
use crate::view::format::{format_money, text_or_missing};
use crate::view::table::{BadgeClass, BadgeMap, Column, EmptyState, EntityTable};

pub const PROPOSAL_BADGES: BadgeMap = BadgeMap {
    entries: &[
        (ProposalStatus::InProgress.label(), BadgeClass::Primary),
        (ProposalStatus::Closed.label(), BadgeClass::Success),
        (ProposalStatus::Lost.label(), BadgeClass::Danger),
    ],
    default_class: BadgeClass::Primary,
    default_label: ProposalStatus::InProgress.label(),
};

/// A proposal with its company and consultant names resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProposalLine {
    pub proposal: Proposal,
    pub company_name: Option<String>,
    pub consultant_name: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolves names from the embedded references first, then from the
/// directory lists loaded for the create form.
pub fn resolve_names(
    proposals: Vec<Proposal>,
    companies: &[Company],
    consultants: &[Consultant],
) -> Vec<ProposalLine> {
    let company_names: HashMap<i32, &str> = companies
        .iter()
        .map(|c| (c.id.get(), c.name.as_str()))
        .collect();
    let consultant_names: HashMap<i32, &str> = consultants
        .iter()
        .map(|c| (c.id.get(), c.name.as_str()))
        .collect();

    proposals
        .into_iter()
        .map(|proposal| {
            let company_name = non_blank(
                proposal
                    .company
                    .as_ref()
                    .and_then(|c| c.name.as_deref()),
            )
            .or_else(|| non_blank(company_names.get(&proposal.company_id.get()).copied()));

            let consultant_name = non_blank(
                proposal
                    .consultant
                    .as_ref()
                    .and_then(|c| c.name.as_deref()),
            )
            .or_else(|| {
                proposal
                    .consultant_id
                    .and_then(|id| non_blank(consultant_names.get(&id.get()).copied()))
            });

            ProposalLine {
                proposal,
                company_name,
                consultant_name,
            }
        })
        .collect()
}

/// Keeps lines whose status equals `status` (when given) and whose number or
/// company name contains `search`, case-insensitively (when non-blank).
pub fn filter_proposals(
    lines: Vec<ProposalLine>,
    status: Option<&str>,
    search: Option<&str>,
) -> Vec<ProposalLine> {
    let status = status.map(str::trim).filter(|s| !s.is_empty());
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    lines
        .into_iter()
        .filter(|line| match status {
            Some(status) => line.proposal.status.as_deref().map(str::trim) == Some(status),
            None => true,
        })
        .filter(|line| match &needle {
            Some(needle) => {
                let in_number = line
                    .proposal
                    .number
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(needle));
                let in_company = line
                    .company_name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(needle));
                in_number || in_company
            }
            None => true,
        })
        .collect()
}

fn number(line: &ProposalLine) -> String {
    text_or_missing(line.proposal.number.as_deref())
}

fn company(line: &ProposalLine) -> String {
    line.company_name
        .clone()
        .unwrap_or_else(|| format!("ID: {}", line.proposal.company_id))
}

fn consultant(line: &ProposalLine) -> String {
    match (&line.consultant_name, line.proposal.consultant_id) {
        (Some(name), _) => name.clone(),
        (None, Some(id)) => format!("ID: {id}"),
        (None, None) => "N/A".to_string(),
    }
}

fn solution(line: &ProposalLine) -> String {
    text_or_missing(line.proposal.solution.as_deref())
}

fn value(line: &ProposalLine) -> String {
    format_money(line.proposal.value)
}

fn id(line: &ProposalLine) -> i32 {
    line.proposal.id.get()
}

fn status(line: &ProposalLine) -> Option<&str> {
    line.proposal.status.as_deref()
}

pub const PROPOSALS_TABLE: EntityTable<ProposalLine> = EntityTable {
    columns: &[
        Column {
            header: "Número",
            cell: number,
        },
        Column {
            header: "Empresa",
            cell: company,
        },
        Column {
            header: "Consultor",
            cell: consultant,
        },
        Column {
            header: "Solução",
            cell: solution,
        },
        Column {
            header: "Valor",
            cell: value,
        },
    ],
    badges: &PROPOSAL_BADGES,
    id,
    status,
    empty_state: EmptyState {
        icon: "fa-handshake",
        title: "Nenhuma proposta encontrada",
        description: "Ajuste os filtros ou cadastre uma nova proposta",
    },
    action_base: "/propostas",
};
