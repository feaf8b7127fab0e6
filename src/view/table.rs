//! Generic entity list renderer.
//!
//! Every list page is an [`EntityTable`] instantiated once per entity kind
//! with a column descriptor set and a status-to-badge table. Rendering
//! produces a [`TableView`] that the `partials/entity_table.html` template
//! turns into markup.

use serde::Serialize;

/// Visual class of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeClass {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
}

impl BadgeClass {
    pub const fn css(self) -> &'static str {
        match self {
            BadgeClass::Primary => "badge-primary",
            BadgeClass::Secondary => "badge-secondary",
            BadgeClass::Success => "badge-success",
            BadgeClass::Info => "badge-info",
            BadgeClass::Warning => "badge-warning",
            BadgeClass::Danger => "badge-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub class: &'static str,
    pub label: String,
}

/// Status value to badge class mapping with a fallback for unknown values.
#[derive(Debug)]
pub struct BadgeMap {
    pub entries: &'static [(&'static str, BadgeClass)],
    pub default_class: BadgeClass,
    pub default_label: &'static str,
}

impl BadgeMap {
    /// Unrecognized or missing statuses get the default class and label.
    pub fn badge(&self, status: Option<&str>) -> Badge {
        let matched = status.and_then(|status| {
            self.entries
                .iter()
                .find(|(label, _)| *label == status.trim())
        });

        match matched {
            Some((label, class)) => Badge {
                class: class.css(),
                label: (*label).to_string(),
            },
            None => Badge {
                class: self.default_class.css(),
                label: self.default_label.to_string(),
            },
        }
    }
}

/// Placeholder row shown instead of an empty table body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One column: a header and a pure cell formatter.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

pub struct EntityTable<T: 'static> {
    pub columns: &'static [Column<T>],
    pub badges: &'static BadgeMap,
    pub id: fn(&T) -> i32,
    pub status: fn(&T) -> Option<&str>,
    pub empty_state: EmptyState,
    /// Route prefix used to build per-row action URLs, e.g. `/contratos`.
    pub action_base: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: i32,
    pub cells: Vec<String>,
    pub badge: Badge,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RowView>,
    /// Set exactly when `rows` is empty.
    pub empty_state: Option<EmptyState>,
    /// Data columns plus the status and action columns.
    pub colspan: usize,
    pub action_base: &'static str,
}

impl<T> EntityTable<T> {
    pub fn render(&self, items: &[T]) -> TableView {
        let rows: Vec<RowView> = items
            .iter()
            .map(|item| RowView {
                id: (self.id)(item),
                cells: self.columns.iter().map(|column| (column.cell)(item)).collect(),
                badge: self.badges.badge((self.status)(item)),
            })
            .collect();

        let empty_state = rows.is_empty().then(|| self.empty_state.clone());

        TableView {
            headers: self.columns.iter().map(|column| column.header).collect(),
            rows,
            empty_state,
            colspan: self.columns.len() + 2,
            action_base: self.action_base,
        }
    }
}
