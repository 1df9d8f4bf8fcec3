use dioxus::prelude::*;

use crate::app::Route;
use crate::features::registry::FormRecord;
use crate::utils::format::display_timestamp;

#[derive(Props, PartialEq, Clone)]
pub struct FormTableProps {
    /// Rows to show, already filtered by the page's search text.
    pub records: Vec<FormRecord>,
}

/// The forms table. Form names link to the detail route; the route
/// parameter is lowercased because detail lookup folds case anyway.
#[component]
pub fn FormTable(props: FormTableProps) -> Element {
    rsx! {
        table {
            class: "form-table",
            thead {
                tr {
                    th { "Form Name" }
                    th { "Description" }
                    th { "Created At" }
                }
            }
            tbody {
                for (index, record) in props.records.into_iter().enumerate() {
                    tr {
                        key: "{index}",
                        td {
                            Link {
                                to: Route::FormDetail { form_name: record.form_name.to_lowercase() },
                                "{record.form_name}"
                            }
                        }
                        td { "{record.description}" }
                        td { "{display_timestamp(&record.created_at)}" }
                    }
                }
            }
        }
    }
}
