//! Spelling suggestion system for Orthus.
//!
//! This module provides dictionary loading and edit-distance based
//! suggestion generation for misspelled words, backed by the
//! open-addressing containers in [`crate::collections`].

pub mod dictionary;
pub mod suggest;

// Re-export commonly used types
pub use dictionary::*;
pub use suggest::*;
