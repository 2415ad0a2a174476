//! The boundary that sheet readers and writers call into.
//!
//! A writer asks for `write_column_names` once per row type and then for
//! `cell_text` (or `write_row`) per instance. A reader creates instances
//! with `new_instance` and fills them with `set_cell_value` (or
//! `read_row`). Nothing here fails: problems go to the diagnostic sink and
//! the affected cell degrades.

use crate::{
    access::{self, FieldAccessor},
    cache::{FieldCache, FieldDescriptor, TypeDescriptor},
    config::MapperConfig,
    convert::ConverterRegistry,
    error::MappingError,
    obs::sink::{DiagnosticSink, TracingSink},
    order::WriteLayout,
    traits::Row,
    value::Value,
};
use dashmap::{DashMap, mapref::entry::Entry};
use std::{fmt, sync::Arc};

///
/// SheetMapper
///
/// Owns the field cache, the converter registry and the resolved write
/// layouts. Independent mappers share nothing.
///

pub struct SheetMapper {
    config: MapperConfig,
    cache: FieldCache,
    converters: ConverterRegistry,
    layouts: DashMap<&'static str, Arc<WriteLayout>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for SheetMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SheetMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetMapper")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("converters", &self.converters)
            .field("layouts", &self.layouts.len())
            .finish_non_exhaustive()
    }
}

impl SheetMapper {
    /// Mapper with default configuration reporting through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    #[must_use]
    pub fn with_config(config: MapperConfig) -> Self {
        let converters = ConverterRegistry::new(&config);

        Self {
            config,
            cache: FieldCache::new(),
            converters,
            layouts: DashMap::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &FieldCache {
        &self.cache
    }

    #[must_use]
    pub const fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    #[must_use]
    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    fn accessor(&self) -> FieldAccessor<'_> {
        FieldAccessor::new(&self.converters, self.sink.as_ref())
    }

    fn descriptor<R: Row>(&self) -> Arc<TypeDescriptor> {
        self.cache.fields::<R>()
    }

    /// Write layout of a row type, resolved once; resolution problems are
    /// reported by whichever caller stores the layout first.
    fn layout<R: Row>(&self) -> Arc<WriteLayout> {
        let path = R::MODEL.path;
        if let Some(cached) = self.layouts.get(path) {
            return Arc::clone(cached.value());
        }

        let resolved = Arc::new(WriteLayout::resolve(&self.descriptor::<R>()));
        let (layout, stored) = match self.layouts.entry(path) {
            Entry::Occupied(entry) => (Arc::clone(entry.get()), false),
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&resolved));
                (resolved, true)
            }
        };

        // the shard lock is released here; the sink may call back in
        if stored {
            layout.report(self.sink.as_ref());
        }

        layout
    }

    // ------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------

    /// Sheet name declared by the row type, else the configured default.
    pub fn sheet_name<R: Row>(&self, _row: &R) -> &str {
        R::MODEL
            .sheet_name
            .unwrap_or(self.config.default_sheet_name.as_str())
    }

    /// Header row for a row type.
    #[must_use]
    pub fn write_column_names<R: Row>(&self) -> Vec<String> {
        self.layout::<R>().column_names()
    }

    /// Text of the field read from `column`; empty when nothing matches,
    /// the value is null, or conversion fails.
    pub fn cell_text<R: Row>(&self, row: &R, column: usize) -> String {
        self.accessor().cell_text(&self.descriptor::<R>(), row, column)
    }

    /// One row of cells aligned with `write_column_names`.
    pub fn write_row<R: Row>(&self, row: &R) -> Vec<String> {
        let accessor = self.accessor();

        self.layout::<R>()
            .columns()
            .iter()
            .map(|column| accessor.field_text(row, &column.field))
            .collect()
    }

    // ------------------------------------------------------------------
    // Reading
    // ------------------------------------------------------------------

    /// Fresh, default-initialised row.
    #[must_use]
    pub fn new_instance<R: Row>(&self) -> R {
        R::default()
    }

    /// Convert `text` into the field read from `column`.
    ///
    /// Returns whether a field was assigned; no field at `column` is not a
    /// failure.
    pub fn set_cell_value<R: Row>(&self, row: &mut R, column: usize, text: &str) -> bool {
        self.accessor()
            .set_cell_value(&self.descriptor::<R>(), row, column, text)
    }

    /// Fresh row populated from cells indexed by column.
    pub fn read_row<R, S>(&self, cells: &[S]) -> R
    where
        R: Row,
        S: AsRef<str>,
    {
        let descriptor = self.descriptor::<R>();
        let accessor = self.accessor();
        let mut row = self.new_instance::<R>();

        for (column, cell) in cells.iter().enumerate() {
            accessor.set_cell_value(&descriptor, &mut row, column, cell.as_ref());
        }

        row
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    #[must_use]
    pub fn mappable_field_count<R: Row>(&self) -> usize {
        self.descriptor::<R>().len()
    }

    #[must_use]
    pub fn locate_field_for_column<R: Row>(&self, column: usize) -> Option<FieldDescriptor> {
        access::locate_field_for_column(&self.descriptor::<R>(), column).copied()
    }

    /// Convert one value for a field; empty text on failure.
    pub fn to_cell_text(&self, field: &FieldDescriptor, value: &Value) -> String {
        self.converters
            .to_cell_text(field, value)
            .unwrap_or_else(|err| {
                self.sink
                    .report(MappingError::from_convert(field.row(), field.name(), &err));
                String::new()
            })
    }

    /// Parse cell text for a field; `Value::Null` on failure.
    pub fn from_cell_text(&self, field: &FieldDescriptor, text: &str) -> Value {
        self.converters
            .from_cell_text(field, text)
            .unwrap_or_else(|err| {
                self.sink
                    .report(MappingError::from_convert(field.row(), field.name(), &err));
                Value::Null
            })
    }
}

///
/// TESTS
///
