//! Page-level state for the form-builder view.
//!
//! The fetched picture record lives here as plain state passed through
//! the component tree, not in a page-global store.

use crate::services::picture::PictureMetadata;

use super::validation::{DraftErrors, FormDraft};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormsState {
    pub search_text: String,
    pub modal_open: bool,
    pub draft: FormDraft,
    pub draft_errors: DraftErrors,
    /// Last persistence failure, shown in a dismissible banner.
    pub storage_error: Option<String>,
    /// Last-value cache of the fetched picture; `None` both before the
    /// fetch resolves and after a failed fetch.
    pub picture: Option<PictureMetadata>,
    pub picture_loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormsAction {
    SetSearchText(String),
    OpenModal,
    CloseModal,
    SetDraftFormName(String),
    SetDraftDescription(String),
    SetDraftName(String),
    SetDraftSurname(String),
    SetDraftAge(String),
    SetDraftErrors(DraftErrors),
    ResetDraft,
    SetStorageError(Option<String>),
    SetPicture(Option<PictureMetadata>),
    SetPictureLoading(bool),
}

impl FormsState {
    // In-place reduction to preserve Dioxus Signal reactivity.
    pub fn reduce_in_place(&mut self, action: FormsAction) {
        match action {
            FormsAction::SetSearchText(text) => {
                self.search_text = text;
            }
            FormsAction::OpenModal => {
                self.modal_open = true;
            }
            FormsAction::CloseModal => {
                self.modal_open = false;
            }
            FormsAction::SetDraftFormName(value) => {
                self.draft.form_name = value;
            }
            FormsAction::SetDraftDescription(value) => {
                self.draft.description = value;
            }
            FormsAction::SetDraftName(value) => {
                self.draft.name = value;
            }
            FormsAction::SetDraftSurname(value) => {
                self.draft.surname = value;
            }
            FormsAction::SetDraftAge(value) => {
                self.draft.age = value;
            }
            FormsAction::SetDraftErrors(errors) => {
                self.draft_errors = errors;
            }
            FormsAction::ResetDraft => {
                self.draft = FormDraft::default();
                self.draft_errors = DraftErrors::default();
            }
            FormsAction::SetStorageError(error) => {
                self.storage_error = error;
            }
            FormsAction::SetPicture(picture) => {
                self.picture = picture;
            }
            FormsAction::SetPictureLoading(loading) => {
                self.picture_loading = loading;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_draft_clears_buffers_and_errors() {
        let mut state = FormsState::default();
        state.reduce_in_place(FormsAction::SetDraftFormName("contact".to_string()));
        state.reduce_in_place(FormsAction::SetDraftErrors(DraftErrors {
            age: Some("Please input your age!"),
            ..Default::default()
        }));

        state.reduce_in_place(FormsAction::ResetDraft);
        assert_eq!(state.draft, FormDraft::default());
        assert!(state.draft_errors.is_clean());
    }

    #[test]
    fn modal_actions_toggle_the_flag() {
        let mut state = FormsState::default();
        state.reduce_in_place(FormsAction::OpenModal);
        assert!(state.modal_open);
        state.reduce_in_place(FormsAction::CloseModal);
        assert!(!state.modal_open);
    }
}
