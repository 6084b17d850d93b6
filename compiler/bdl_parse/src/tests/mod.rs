//! Parser tests.
//!
//! - `parser`: whole-document behavior (span soundness, token coverage,
//!   options)
//! - `properties`: property-based robustness tests
