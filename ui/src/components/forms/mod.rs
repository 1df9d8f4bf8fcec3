pub mod add_form_modal;

pub use add_form_modal::AddFormModal;
