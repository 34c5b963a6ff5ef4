use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{dashboard_stats, MockTable, Role};
use shared_ui::{Card, CardContent, DataTable, PageHeader, StatCard, StatGrid};

/// Landing page of a portal: greeting plus the role's headline figures.
#[component]
pub fn DashboardPage(role: Role) -> Element {
    let auth = use_auth();
    let name = auth
        .session
        .read()
        .as_ref()
        .map(|s| s.display_name.clone())
        .unwrap_or_default();

    rsx! {
        PageHeader {
            title: format!("Welcome, {name}"),
            subtitle: format!("{} dashboard", role.display_name()),
        }
        StatGrid {
            for stat in dashboard_stats(role) {
                StatCard {
                    key: "{stat.label}",
                    label: stat.label.to_string(),
                    value: stat.value.to_string(),
                    detail: stat.detail.to_string(),
                }
            }
        }
    }
}

/// A portal page backed by one fixed table.
#[component]
pub fn TablePage(table: MockTable) -> Element {
    let columns: Vec<String> = table.columns.iter().map(|c| c.to_string()).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    rsx! {
        PageHeader { title: table.title.to_string() }
        Card {
            CardContent {
                DataTable { columns: columns, rows: rows }
            }
        }
    }
}

/// Placeholder for a portal page that does not exist yet. Only reachable
/// through the portal's guard.
#[component]
pub fn MissingPage(rest: Vec<String>) -> Element {
    let page = rest.join("/");

    rsx! {
        PageHeader {
            title: "Under construction",
            subtitle: "This page is being built.".to_string(),
        }
        Card {
            CardContent {
                p { class: "missing-page", "Nothing lives at {page} yet. Use the menu to pick another page." }
            }
        }
    }
}
