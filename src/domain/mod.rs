//! # Domain Layer
//!
//! Search criteria, upstream payload shapes, offer cards, and the pure
//! normalization that turns the former into the latter.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
