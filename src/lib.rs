//! # Orthus
//!
//! A spelling suggestion library built on a custom open-addressing hash
//! table with quadratic probing and tombstone deletion.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Open-addressing hash map and set with probe-collision accounting
//! - Edit-distance based candidate generation (distance 1 and 2)
//! - Dictionary-filtered suggestions for misspelled words
//! - Interactive spell-checking CLI

pub mod cli;
pub mod collections;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
