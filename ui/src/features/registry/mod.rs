//! The form registry: records, storage contract, validation and the
//! page state that drives the form-builder view.

pub mod registry;
pub mod state;
pub mod storage;
pub mod types;
pub mod validation;

pub use registry::{FormRegistry, RegistryError};
pub use state::{FormsAction, FormsState};
pub use storage::{BrowserStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{FormFields, FormRecord, FormSubmission, STORAGE_KEY};
pub use validation::{submission, validate_draft, DraftErrors, FormDraft};
