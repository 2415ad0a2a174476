//! Output column ordering.

use crate::{
    cache::{FieldDescriptor, TypeDescriptor},
    error::MappingError,
    obs::sink::DiagnosticSink,
};

///
/// WriteColumn
/// A field placed in the output, with its effective write order.
///

#[derive(Clone, Copy, Debug)]
pub struct WriteColumn {
    pub order: u32,
    pub field: FieldDescriptor,
}

///
/// WriteLayout
///
/// Resolved output columns of one row type plus the configuration
/// problems found while resolving them.
///

#[derive(Clone, Debug, Default)]
pub struct WriteLayout {
    columns: Vec<WriteColumn>,
    diagnostics: Vec<MappingError>,
}

impl WriteLayout {
    /// Sort the fields with a resolvable write order ascending by it.
    ///
    /// The sort is stable, so fields sharing an order keep declaration
    /// order. Fields without an order are left out.
    #[must_use]
    pub fn resolve(descriptor: &TypeDescriptor) -> Self {
        let mut columns = Vec::with_capacity(descriptor.len());
        let mut diagnostics = Vec::new();

        for field in descriptor.fields() {
            match field.effective_write_order() {
                Some(order) => columns.push(WriteColumn {
                    order,
                    field: *field,
                }),
                None => diagnostics.push(MappingError::configuration(
                    field.row(),
                    field.name(),
                    format!(
                        "column '{}' has no write order or shared order; excluded from output",
                        field.column_name()
                    ),
                )),
            }
        }

        columns.sort_by_key(|column| column.order);

        for pair in columns.windows(2) {
            if pair[0].order == pair[1].order {
                diagnostics.push(MappingError::configuration(
                    pair[1].field.row(),
                    pair[1].field.name(),
                    format!(
                        "write order {} is shared with field '{}'",
                        pair[1].order,
                        pair[0].field.name()
                    ),
                ));
            }
        }

        Self {
            columns,
            diagnostics,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[WriteColumn] {
        &self.columns
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[MappingError] {
        &self.diagnostics
    }

    /// Hand every resolution problem to `sink`.
    pub fn report(&self, sink: &dyn DiagnosticSink) {
        for diagnostic in &self.diagnostics {
            sink.report(diagnostic.clone());
        }
    }

    /// Header row: column display names in output order.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.field.column_name().to_string())
            .collect()
    }
}

/// Resolved output columns, reporting missing and duplicate orders.
pub fn write_columns(descriptor: &TypeDescriptor, sink: &dyn DiagnosticSink) -> Vec<WriteColumn> {
    let layout = WriteLayout::resolve(descriptor);
    layout.report(sink);

    layout.columns
}

/// Header row: column display names in output order.
pub fn write_column_names(descriptor: &TypeDescriptor, sink: &dyn DiagnosticSink) -> Vec<String> {
    let layout = WriteLayout::resolve(descriptor);
    layout.report(sink);

    layout.column_names()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::FieldCache,
        error::ErrorClass,
        obs::sink::CollectingSink,
        test_fixtures::{Blank, Person, Sparse, Tie},
    };

    #[test]
    fn shared_orders_produce_header_row() {
        let cache = FieldCache::new();
        let sink = CollectingSink::new();

        let names = write_column_names(&cache.fields::<Person>(), &sink);
        assert_eq!(names, ["Name", "Age", "Nickname"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn write_order_beats_shared_order() {
        let cache = FieldCache::new();
        let sink = CollectingSink::new();

        let columns = write_columns(&cache.fields::<Sparse>(), &sink);
        let placed: Vec<_> = columns
            .iter()
            .map(|c| (c.field.column_name(), c.order))
            .collect();

        assert_eq!(placed, [("E", 0), ("B", 1), ("A", 5)]);
    }

    #[test]
    fn fields_without_write_order_are_excluded_and_reported() {
        let cache = FieldCache::new();
        let sink = CollectingSink::new();

        let names = write_column_names(&cache.fields::<Sparse>(), &sink);
        assert_eq!(names, ["E", "B", "A"]);

        let reported: Vec<_> = sink.snapshot().into_iter().map(|d| d.field).collect();
        assert_eq!(reported, [Some("c"), Some("d")]);
        assert_eq!(sink.count(ErrorClass::Configuration), 2);
    }

    #[test]
    fn ties_keep_declaration_order_and_are_reported() {
        let cache = FieldCache::new();
        let sink = CollectingSink::new();

        let names = write_column_names(&cache.fields::<Tie>(), &sink);
        assert_eq!(names, ["Third", "First", "Second"]);

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field, Some("second"));
        assert!(diagnostics[0].message.contains("first"));
    }

    #[test]
    fn header_row_is_stable_across_calls() {
        let cache = FieldCache::new();
        let sink = CollectingSink::new();
        let descriptor = cache.fields::<Sparse>();

        let first = write_column_names(&descriptor, &sink);
        let second = write_column_names(&descriptor, &sink);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn layout_keeps_diagnostics_until_reported() {
        let cache = FieldCache::new();
        let layout = WriteLayout::resolve(&cache.fields::<Tie>());
        assert_eq!(layout.diagnostics().len(), 1);
        assert_eq!(layout.columns().len(), 3);

        let sink = CollectingSink::new();
        layout.report(&sink);
        layout.report(&sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn type_without_mapped_fields_has_empty_header() {
        let cache = FieldCache::new();
        let sink = CollectingSink::new();

        assert!(write_column_names(&cache.fields::<Blank>(), &sink).is_empty());
        assert!(sink.is_empty());
    }
}
