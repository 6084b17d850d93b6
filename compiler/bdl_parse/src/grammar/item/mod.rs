//! Statement productions.
//!
//! Every statement starts with its keyword. Once the keyword has matched the
//! statement is committed: required tokens use `expect` and fail the parse.

mod custom;
mod enum_def;
mod import;
mod oneof;
mod proc_def;
mod struct_def;
mod union_def;

pub(crate) use custom::custom;
pub(crate) use enum_def::enum_def;
pub(crate) use import::import;
pub(crate) use oneof::oneof;
pub(crate) use proc_def::proc_def;
pub(crate) use struct_def::struct_def;
pub(crate) use union_def::union_def;
