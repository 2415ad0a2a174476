//! ## Crate layout
//! - `model`: static row and column metadata emitted by `#[derive(Row)]`.
//! - `cache`: per-type discovery of mappable fields.
//! - `order`: output column ordering.
//! - `convert`: custom converters, date patterns and built-in conversions.
//! - `access`: per-cell reads and writes.
//! - `mapper`: `SheetMapper`, the boundary sheet readers and writers call.
//! - `obs`: diagnostic sinks.
//!
//! The `prelude` module covers what row type definitions and sheet glue
//! code usually need.

pub use cellmap_core::{
    DEFAULT_SHEET_NAME, access, cache, config, convert, error, mapper, model, obs, order,
    text_cell_value, traits, value,
};
pub use cellmap_derive::Row;

/// re-exports
///
/// the built-in field types live in these crates; re-exported so row
/// definitions do not need them in their own Cargo.toml
pub mod __reexports {
    pub use rust_decimal;
    pub use time;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// `Row` names both the derive macro and the trait.
///

pub mod prelude {
    pub use crate::Row;
    pub use crate::{
        config::MapperConfig,
        error::{ConvertError, ErrorClass, MappingError},
        mapper::SheetMapper,
        obs::{CollectingSink, DiagnosticSink, TracingSink},
        traits::{CellValue, Converter, Row},
        value::{FieldKind, Value},
    };
}
