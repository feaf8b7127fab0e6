use crate::domain::contract::{Contract, PaymentStatus};
use crate::view::format::{format_date, format_money, text_or_missing};
use crate::view::table::{BadgeClass, BadgeMap, Column, EmptyState, EntityTable};

pub const CONTRACT_BADGES: BadgeMap = BadgeMap {
    entries: &[
        (PaymentStatus::Pending.label(), BadgeClass::Warning),
        (PaymentStatus::Paid.label(), BadgeClass::Success),
        (PaymentStatus::Overdue.label(), BadgeClass::Danger),
        (PaymentStatus::Canceled.label(), BadgeClass::Secondary),
    ],
    default_class: BadgeClass::Warning,
    default_label: PaymentStatus::Pending.label(),
};

fn number(contract: &Contract) -> String {
    text_or_missing(contract.number.as_deref())
}

fn proposal(contract: &Contract) -> String {
    contract
        .proposal
        .as_ref()
        .and_then(|p| p.number.as_deref())
        .filter(|n| !n.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("ID: {}", contract.proposal_id))
}

fn signed_on(contract: &Contract) -> String {
    format_date(contract.signed_on)
}

fn due_on(contract: &Contract) -> String {
    format_date(contract.due_on)
}

fn value(contract: &Contract) -> String {
    format_money(contract.value)
}

fn id(contract: &Contract) -> i32 {
    contract.id.get()
}

fn status(contract: &Contract) -> Option<&str> {
    contract.payment_status.as_deref()
}

pub const CONTRACTS_TABLE: EntityTable<Contract> = EntityTable {
    columns: &[
        Column {
            header: "Número",
            cell: number,
        },
        Column {
            header: "Proposta",
            cell: proposal,
        },
        Column {
            header: "Assinatura",
            cell: signed_on,
        },
        Column {
            header: "Vencimento",
            cell: due_on,
        },
        Column {
            header: "Valor",
            cell: value,
        },
    ],
    badges: &CONTRACT_BADGES,
    id,
    status,
    empty_state: EmptyState {
        icon: "fa-file-contract",
        title: "Nenhum contrato encontrado",
        description: "Comece adicionando um novo contrato",
    },
    action_base: "/contratos",
};
