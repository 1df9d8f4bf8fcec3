use dioxus::prelude::*;

use crate::components::display::{FormTable, PictureCard};
use crate::components::forms::AddFormModal;
use crate::features::registry::{
    BrowserStore, DraftErrors, FormRegistry, FormSubmission, FormsAction, FormsState,
    RegistryError,
};
use crate::services::picture::PictureClient;
use crate::{console_error, console_info, console_warn};

const FORM_BUILDER_CSS: Asset = asset!("/assets/styling/form_builder.css");

/// The home page: searchable table of stored forms, the add-form modal
/// and the random picture card.
#[component]
pub fn FormBuilder() -> Element {
    // Hydrated once from localStorage; the registry is the single source
    // of truth for records, everything else lives in FormsState.
    let mut registry = use_signal(|| FormRegistry::hydrate(BrowserStore));
    let mut state = use_signal(FormsState::default);

    // Dispatch function for actions - using in-place reduction to
    // preserve Dioxus Signal reactivity.
    let dispatch = EventHandler::new(move |action: FormsAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Fire-and-forget picture fetch. Shares no state with the registry;
    // failure just leaves the card empty.
    use_effect(move || {
        dispatch.call(FormsAction::SetPictureLoading(true));
        spawn(async move {
            let client = PictureClient::new();
            match client.fetch_random_picture().await {
                Ok(picture) => {
                    dispatch.call(FormsAction::SetPicture(Some(picture)));
                }
                Err(err) => {
                    console_warn!("[Form Builder] Picture fetch failed: {}", err);
                    dispatch.call(FormsAction::SetPicture(None));
                }
            }
            dispatch.call(FormsAction::SetPictureLoading(false));
        });
    });

    let on_submit = EventHandler::new(move |submission: FormSubmission| {
        let result = registry.with_mut(|r| {
            r.create(
                &submission.form_name,
                &submission.description,
                submission.fields.clone(),
            )
        });
        match result {
            Ok(record) => {
                console_info!("[Form Builder] Created form '{}'", record.form_name);
                dispatch.call(FormsAction::ResetDraft);
                dispatch.call(FormsAction::CloseModal);
                dispatch.call(FormsAction::SetStorageError(None));
            }
            Err(RegistryError::DuplicateName { .. }) => {
                dispatch.call(FormsAction::SetDraftErrors(DraftErrors {
                    form_name: Some("A form with this name already exists"),
                    ..Default::default()
                }));
            }
            Err(err) => {
                // Write failure: the record was rolled back, tell the
                // user instead of dropping it silently.
                console_error!("[Form Builder] {}", err);
                dispatch.call(FormsAction::SetStorageError(Some(err.to_string())));
                dispatch.call(FormsAction::CloseModal);
            }
        }
    });

    let rows = registry.read().search(&state().search_text);

    let storage_banner = state().storage_error.map(|message| {
        rsx! {
            div {
                class: "storage-error-banner",
                span { "Saving failed: {message}" }
                button {
                    class: "dismiss-button",
                    onclick: move |_| dispatch.call(FormsAction::SetStorageError(None)),
                    "Dismiss"
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FORM_BUILDER_CSS }

        div {
            class: "form-builder-container",

            h1 {
                class: "page-title",
                "Form Builder"
            }

            {storage_banner}

            div {
                class: "toolbar",
                button {
                    class: "add-button",
                    onclick: move |_| dispatch.call(FormsAction::OpenModal),
                    "Add"
                }
                input {
                    class: "search-input",
                    r#type: "text",
                    value: "{state().search_text}",
                    placeholder: "Search...",
                    oninput: move |event| dispatch.call(FormsAction::SetSearchText(event.value()))
                }
            }

            FormTable { records: rows }

            AddFormModal {
                state: state,
                dispatch: dispatch,
                on_submit: on_submit
            }

            PictureCard {
                picture: state().picture,
                is_loading: state().picture_loading
            }
        }
    }
}
