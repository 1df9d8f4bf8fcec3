use dioxus::prelude::*;

use crate::app::Route;
use crate::components::display::FormDetailCard;
use crate::features::registry::{BrowserStore, FormRegistry};

/// Detail page for one stored form. The route parameter arrives
/// lowercased; lookup folds case, so the original casing still matches.
#[component]
pub fn FormDetailPage(form_name: String) -> Element {
    let registry = use_signal(|| FormRegistry::hydrate(BrowserStore));
    let record = registry.read().find_by_name(&form_name).cloned();

    match record {
        Some(record) => rsx! {
            div {
                class: "form-detail-page",
                Link {
                    to: Route::Home {},
                    class: "back-link",
                    "Back"
                }
                FormDetailCard { record }
            }
        },
        // Unknown name renders nothing, matching the table's behavior of
        // only linking to names that exist.
        None => rsx! {},
    }
}
