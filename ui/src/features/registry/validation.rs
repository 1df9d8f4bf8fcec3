//! Submission-time validation for the add-form dialog.
//!
//! Required-field checks live here, next to the draft they check, so the
//! registry itself never has to raise validation errors. Messages are
//! rendered inline next to the offending field and block submission.

use super::types::{FormFields, FormSubmission};

/// Text buffers behind the add-form dialog. `age` stays a string until
/// submission so the input can hold whatever the user typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub form_name: String,
    pub description: String,
    pub name: String,
    pub surname: String,
    pub age: String,
}

/// Per-field messages for the dialog. `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub form_name: Option<&'static str>,
    pub name: Option<&'static str>,
    pub surname: Option<&'static str>,
    pub age: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_clean(&self) -> bool {
        self.form_name.is_none()
            && self.name.is_none()
            && self.surname.is_none()
            && self.age.is_none()
    }
}

pub fn form_name_error(draft: &FormDraft) -> Option<&'static str> {
    if draft.form_name.trim().is_empty() {
        return Some("Please input form name!");
    }
    None
}

pub fn name_error(draft: &FormDraft) -> Option<&'static str> {
    if draft.name.trim().is_empty() {
        return Some("Please input your name!");
    }
    None
}

pub fn surname_error(draft: &FormDraft) -> Option<&'static str> {
    if draft.surname.trim().is_empty() {
        return Some("Please input your surname!");
    }
    None
}

pub fn age_error(draft: &FormDraft) -> Option<&'static str> {
    let age = draft.age.trim();
    if age.is_empty() {
        return Some("Please input your age!");
    }
    if age.parse::<u32>().is_err() {
        return Some("Age must be a whole number");
    }
    None
}

/// Runs every field check. Description is optional and never flagged.
pub fn validate_draft(draft: &FormDraft) -> DraftErrors {
    DraftErrors {
        form_name: form_name_error(draft),
        name: name_error(draft),
        surname: surname_error(draft),
        age: age_error(draft),
    }
}

/// Turns a draft into a submission, or returns the field messages that
/// block it.
pub fn submission(draft: &FormDraft) -> Result<FormSubmission, DraftErrors> {
    let errors = validate_draft(draft);
    if !errors.is_clean() {
        return Err(errors);
    }
    Ok(FormSubmission {
        form_name: draft.form_name.trim().to_string(),
        description: draft.description.trim().to_string(),
        fields: FormFields {
            name: draft.name.trim().to_string(),
            surname: draft.surname.trim().to_string(),
            // age_error already proved this parses
            age: draft.age.trim().parse().unwrap_or_default(),
        },
    })
}
