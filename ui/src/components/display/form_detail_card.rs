use dioxus::prelude::*;

use crate::features::registry::FormRecord;
use crate::utils::format::display_timestamp;

#[derive(Props, PartialEq, Clone)]
pub struct FormDetailCardProps {
    pub record: FormRecord,
}

/// Read-only descriptions block for one stored form.
#[component]
pub fn FormDetailCard(props: FormDetailCardProps) -> Element {
    let record = props.record;

    rsx! {
        div {
            class: "form-detail-card",

            h2 {
                class: "detail-title",
                "Form Info"
            }

            dl {
                class: "detail-list",
                dt { "Form Name" }
                dd { "{record.form_name}" }
                dt { "Description" }
                dd { "{record.description}" }
                dt { "Created At" }
                dd { "{display_timestamp(&record.created_at)}" }
                dt { "Name" }
                dd { "{record.fields.name}" }
                dt { "Surname" }
                dd { "{record.fields.surname}" }
                dt { "Age" }
                dd { "{record.fields.age}" }
            }
        }
    }
}
