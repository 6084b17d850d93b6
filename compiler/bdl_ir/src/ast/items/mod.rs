//! Module-level statement node types.

mod imports;
mod procs;
mod types;

pub use imports::{Import, ImportAlias, ImportItem};
pub use procs::{Proc, ThrowsClause};
pub use types::{
    Custom, Enum, EnumItem, Oneof, OneofItem, Struct, StructField, Union, UnionItem,
    UnionItemStruct,
};
