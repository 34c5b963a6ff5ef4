use dioxus::prelude::*;

/// Read-only table rendered from column headers and rows of text cells.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    #[props(default)] title: Option<String>,
    #[props(default = "Nothing to show yet.".to_string())] empty_message: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                if let Some(text) = title {
                    caption { "{text}" }
                }
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", scope: "col", "{column}" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "data-table-empty", colspan: "{columns.len()}", "{empty_message}" }
                        }
                    }
                    for (i, row) in rows.iter().enumerate() {
                        tr { key: "{i}", class: "data-table-row",
                            for cell in row.iter() {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
