//! Random picture metadata fetch.
//!
//! The rest of the page treats this as an opaque async call: it either
//! returns a [`PictureMetadata`] record or fails, and failure just means
//! there is nothing to display.

pub mod client;
pub mod errors;
pub mod types;

pub use client::{picture_id, PictureClient};
pub use errors::FetchError;
pub use types::PictureMetadata;
