use crate::domain::schedule::{Schedule, ScheduleStatus};
use crate::view::format::{format_date, format_decimal};
use crate::view::table::{BadgeClass, BadgeMap, Column, EmptyState, EntityTable};

pub const SCHEDULE_BADGES: BadgeMap = BadgeMap {
    entries: &[
        (ScheduleStatus::NotStarted.label(), BadgeClass::Primary),
        (ScheduleStatus::InProgress.label(), BadgeClass::Info),
        (ScheduleStatus::Completed.label(), BadgeClass::Success),
        (ScheduleStatus::Late.label(), BadgeClass::Danger),
    ],
    default_class: BadgeClass::Primary,
    default_label: ScheduleStatus::NotStarted.label(),
};

fn proposal(schedule: &Schedule) -> String {
    schedule
        .proposal
        .as_ref()
        .and_then(|p| p.number.as_deref())
        .filter(|n| !n.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("ID: {}", schedule.proposal_id))
}

fn starts_on(schedule: &Schedule) -> String {
    format_date(schedule.starts_on)
}

fn ends_on(schedule: &Schedule) -> String {
    format_date(schedule.ends_on)
}

fn planned(schedule: &Schedule) -> String {
    format!("{}h", format_decimal(schedule.planned_hours))
}

fn executed(schedule: &Schedule) -> String {
    format!("{}h", format_decimal(schedule.executed_hours))
}

fn completion(schedule: &Schedule) -> String {
    format!("{}%", format_decimal(schedule.completion))
}

fn id(schedule: &Schedule) -> i32 {
    schedule.id.get()
}

fn status(schedule: &Schedule) -> Option<&str> {
    schedule.status.as_deref()
}

pub const SCHEDULES_TABLE: EntityTable<Schedule> = EntityTable {
    columns: &[
        Column {
            header: "Proposta",
            cell: proposal,
        },
        Column {
            header: "Início",
            cell: starts_on,
        },
        Column {
            header: "Término",
            cell: ends_on,
        },
        Column {
            header: "Horas previstas",
            cell: planned,
        },
        Column {
            header: "Horas executadas",
            cell: executed,
        },
        Column {
            header: "Conclusão",
            cell: completion,
        },
    ],
    badges: &SCHEDULE_BADGES,
    id,
    status,
    empty_state: EmptyState {
        icon: "fa-calendar-alt",
        title: "Nenhum cronograma encontrado",
        description: "Comece adicionando um novo cronograma",
    },
    action_base: "/cronogramas",
};
