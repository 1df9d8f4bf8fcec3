//! User Interface Components
//!
//! This module contains reusable Dioxus components for the form builder:
//!
//! - **forms**: the add-form modal dialog
//! - **display**: the searchable form table, detail card and picture card
//! - **inputs**: validated input fields and inline error messages

pub mod display;
pub mod forms;
pub mod inputs;
