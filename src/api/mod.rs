//! # API Layer
//!
//! User-facing collaborators around a search session.
//!
//! - [`form`]: input validation and submission
//! - [`format`]: pt-BR money and miles formatting
//! - [`render`]: text rendering of the results view

pub mod form;
pub mod format;
pub mod render;

pub use form::SearchForm;
pub use render::{render_card, render_state};
