//! Open-addressing hash containers for Orthus.
//!
//! This module provides the hash map and hash set that back the spelling
//! dictionary and suggestion engine. Both use quadratic probing with
//! tombstone deletion and keep a running count of probe collisions, which
//! the CLI surfaces as a table-health statistic.

pub mod open_map;
pub mod open_set;
pub mod prime;

// Re-export commonly used types
pub use open_map::*;
pub use open_set::*;
