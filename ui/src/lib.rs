//! This crate contains all shared UI components and the form registry
//! for the form-builder demo.

pub mod app;
pub use app::{FormBuilder, FormDetailPage, Route};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use features::registry;
