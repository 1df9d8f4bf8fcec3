use dioxus::prelude::*;

use crate::components::inputs::{FieldErrorText, InputType, ValidatedInput};
use crate::features::registry::{submission, FormSubmission, FormsAction, FormsState};

#[derive(Props, PartialEq, Clone)]
pub struct AddFormModalProps {
    pub state: Signal<FormsState>,
    pub dispatch: EventHandler<FormsAction>,
    /// Called with a validated submission; the page decides what the
    /// registry does with it.
    pub on_submit: EventHandler<FormSubmission>,
}

#[component]
pub fn AddFormModal(props: AddFormModalProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;

    if !state().modal_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-backdrop",

            div {
                class: "modal",

                h2 {
                    class: "modal-title",
                    "Add Form"
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Form Name:"
                    }
                    ValidatedInput {
                        value: state().draft.form_name,
                        placeholder: "Enter a unique form name".to_string(),
                        input_type: InputType::Text,
                        invalid: state().draft_errors.form_name.is_some(),
                        on_change: move |value: String| {
                            dispatch.call(FormsAction::SetDraftFormName(value));
                        }
                    }
                    FieldErrorText { message: state().draft_errors.form_name }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Description:"
                    }
                    ValidatedInput {
                        value: state().draft.description,
                        placeholder: "Optional description".to_string(),
                        input_type: InputType::Text,
                        invalid: false,
                        on_change: move |value: String| {
                            dispatch.call(FormsAction::SetDraftDescription(value));
                        }
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Name:"
                    }
                    ValidatedInput {
                        value: state().draft.name,
                        placeholder: "Enter your name".to_string(),
                        input_type: InputType::Text,
                        invalid: state().draft_errors.name.is_some(),
                        on_change: move |value: String| {
                            dispatch.call(FormsAction::SetDraftName(value));
                        }
                    }
                    FieldErrorText { message: state().draft_errors.name }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Surname:"
                    }
                    ValidatedInput {
                        value: state().draft.surname,
                        placeholder: "Enter your surname".to_string(),
                        input_type: InputType::Text,
                        invalid: state().draft_errors.surname.is_some(),
                        on_change: move |value: String| {
                            dispatch.call(FormsAction::SetDraftSurname(value));
                        }
                    }
                    FieldErrorText { message: state().draft_errors.surname }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Age:"
                    }
                    ValidatedInput {
                        value: state().draft.age,
                        placeholder: "Enter your age".to_string(),
                        input_type: InputType::Number,
                        invalid: state().draft_errors.age.is_some(),
                        on_change: move |value: String| {
                            dispatch.call(FormsAction::SetDraftAge(value));
                        }
                    }
                    FieldErrorText { message: state().draft_errors.age }
                }

                div {
                    class: "button-section",
                    button {
                        class: "submit-button",
                        onclick: move |_| {
                            // Validation blocks the submission here; the
                            // registry never raises field errors itself.
                            match submission(&state().draft) {
                                Ok(validated) => on_submit.call(validated),
                                Err(errors) => dispatch.call(FormsAction::SetDraftErrors(errors)),
                            }
                        },
                        "Submit"
                    }
                    button {
                        class: "cancel-button",
                        onclick: move |_| dispatch.call(FormsAction::CloseModal),
                        "Cancel"
                    }
                }
            }
        }
    }
}
