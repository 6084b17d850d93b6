//! BDL IR - Syntax Tree Types
//!
//! Data model shared by the BDL parser and downstream tools:
//! - [`Span`] byte ranges into the schema source
//! - [`ast`] nodes that record every significant token
//! - [`visitor`] read-only traversal
//! - [`picker`] offset lookups for editor features
//!
//! The tree is plain owned data. With the `serde` feature enabled every node
//! can be serialized for caching or for handing to non-Rust tooling.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
pub mod picker;
mod span;
pub mod visitor;

pub use span::{Span, SpanError};
