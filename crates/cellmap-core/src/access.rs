//! Per-cell field access.
//!
//! Every failure here is reported to the diagnostic sink and degrades:
//! reads fall back to empty text, writes leave the field untouched.

use crate::{
    cache::{FieldDescriptor, TypeDescriptor},
    convert::ConverterRegistry,
    error::MappingError,
    obs::sink::DiagnosticSink,
    traits::Row,
};

/// First field, in declaration order, whose effective read order equals
/// `column`. Fields without a read or shared order never match.
#[must_use]
pub fn locate_field_for_column(
    descriptor: &TypeDescriptor,
    column: usize,
) -> Option<&FieldDescriptor> {
    descriptor.fields().iter().find(|field| {
        field
            .effective_read_order()
            .and_then(|order| usize::try_from(order).ok())
            == Some(column)
    })
}

///
/// FieldAccessor
///
/// Reads and writes single fields through the converter registry.
///

#[derive(Clone, Copy)]
pub struct FieldAccessor<'a> {
    converters: &'a ConverterRegistry,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> FieldAccessor<'a> {
    #[must_use]
    pub const fn new(converters: &'a ConverterRegistry, sink: &'a dyn DiagnosticSink) -> Self {
        Self { converters, sink }
    }

    /// Text of the field read from `column`; empty when no field matches.
    pub fn cell_text<R: Row>(&self, descriptor: &TypeDescriptor, row: &R, column: usize) -> String {
        locate_field_for_column(descriptor, column)
            .map(|field| self.field_text(row, field))
            .unwrap_or_default()
    }

    /// Text of one field; empty when the value is null or conversion fails.
    pub fn field_text<R: Row>(&self, row: &R, field: &FieldDescriptor) -> String {
        let Some(value) = row.get_value(field.index()) else {
            self.sink.report(MappingError::access(
                field.row(),
                field.name(),
                format!("row type has no readable field at index {}", field.index()),
            ));
            return String::new();
        };

        match self.converters.to_cell_text(field, &value) {
            Ok(text) => text,
            Err(err) => {
                self.sink
                    .report(MappingError::from_convert(field.row(), field.name(), &err));
                String::new()
            }
        }
    }

    /// Convert `text` and assign it to the field read from `column`.
    ///
    /// Returns whether a field was assigned. No matching field is not a
    /// failure and is not reported.
    pub fn set_cell_value<R: Row>(
        &self,
        descriptor: &TypeDescriptor,
        row: &mut R,
        column: usize,
        text: &str,
    ) -> bool {
        locate_field_for_column(descriptor, column)
            .is_some_and(|field| self.set_field_value(row, field, text))
    }

    /// Convert `text` and assign it to one field; `false` when it was left
    /// untouched.
    pub fn set_field_value<R: Row>(&self, row: &mut R, field: &FieldDescriptor, text: &str) -> bool {
        let result = self
            .converters
            .from_cell_text(field, text)
            .and_then(|value| row.set_value(field.index(), value));

        match result {
            Ok(()) => true,
            Err(err) => {
                self.sink
                    .report(MappingError::from_convert(field.row(), field.name(), &err));
                false
            }
        }
    }
}

///
/// TESTS
///
