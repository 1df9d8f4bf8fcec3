//! Input components for form fields and inline validation messages

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub invalid: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let input_class = if props.invalid {
        "input-field input-invalid"
    } else {
        "input-field"
    };

    rsx! {
        input {
            class: "{input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorTextProps {
    pub message: Option<&'static str>,
}

/// Inline message rendered under the offending input; nothing when the
/// field is fine.
#[component]
pub fn FieldErrorText(props: FieldErrorTextProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "field-error",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
