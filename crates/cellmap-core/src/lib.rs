//! Core runtime for cellmap: row models, the per-type field cache, column
//! ordering, cell value conversion, and the `SheetMapper` boundary that
//! sheet readers and writers call once per cell.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod access;
pub mod cache;
pub mod config;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod model;
pub mod obs;
pub mod order;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Sheet name used when a row type does not declare one.
pub const DEFAULT_SHEET_NAME: &str = "Sheet0";

///
/// Prelude
///
/// Domain vocabulary only; errors and sinks are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        config::MapperConfig,
        mapper::SheetMapper,
        model::{ColumnModel, ConverterModel, FieldModel, RowModel},
        traits::{CellValue, Converter, Row},
        value::{FieldKind, Value},
    };
}
