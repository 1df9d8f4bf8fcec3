//! Pages and the route table.

pub mod form_builder;
pub mod form_detail;

pub use form_builder::FormBuilder;
pub use form_detail::FormDetailPage;

use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/forms/:form_name")]
    FormDetail { form_name: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        FormBuilder {}
    }
}

#[component]
fn FormDetail(form_name: String) -> Element {
    rsx! {
        FormDetailPage { form_name }
    }
}
