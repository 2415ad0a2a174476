//! Static row metadata.
//!
//! A `RowModel` is the declarative mapping table for one row type: every
//! declared field in declaration order, each optionally carrying column
//! metadata. Models are emitted by `#[derive(Row)]` or written by hand and
//! are never mutated; the field cache reads them once per type.
pub mod field;
pub mod row;

// re-exports
pub use field::{ColumnModel, ConverterModel, FieldModel};
pub use row::RowModel;
