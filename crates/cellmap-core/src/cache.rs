//! Per-type field metadata cache.
//!
//! The first lookup for a row type walks its `RowModel`, keeps the fields
//! that carry column metadata, and stores the resulting `TypeDescriptor`
//! under the type path. Descriptors are immutable and live as long as the
//! cache; nothing is ever evicted.

use crate::{
    model::{ColumnModel, ConverterModel, FieldModel, RowModel},
    traits::Row,
    value::FieldKind,
};
use dashmap::DashMap;
use std::sync::Arc;

///
/// FieldDescriptor
///
/// A mappable field: its position in `RowModel::fields` plus its column
/// metadata.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    row: &'static str,
    index: usize,
    field: &'static FieldModel,
    column: &'static ColumnModel,
}

impl FieldDescriptor {
    /// Describe field `index` of `model`, `None` when it is not mappable.
    #[must_use]
    pub fn new(model: &'static RowModel, index: usize) -> Option<Self> {
        let field = model.fields.get(index)?;
        let column = field.column.as_ref()?;

        Some(Self {
            row: model.path,
            index,
            field,
            column,
        })
    }

    /// Path of the owning row type.
    #[must_use]
    pub const fn row(&self) -> &'static str {
        self.row
    }

    /// Position in `RowModel::fields`, as passed to `Row::get_value`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.field.type_name
    }

    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        self.column.name
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.column.kind
    }

    #[must_use]
    pub const fn nullable(&self) -> bool {
        self.column.nullable
    }

    #[must_use]
    pub const fn converter(&self) -> Option<&'static ConverterModel> {
        self.column.converter.as_ref()
    }

    #[must_use]
    pub const fn date_pattern(&self) -> Option<&'static str> {
        self.column.date_pattern
    }

    #[must_use]
    pub const fn column(&self) -> &'static ColumnModel {
        self.column
    }

    #[must_use]
    pub const fn effective_read_order(&self) -> Option<u32> {
        self.column.effective_read_order()
    }

    #[must_use]
    pub const fn effective_write_order(&self) -> Option<u32> {
        self.column.effective_write_order()
    }
}

///
/// TypeDescriptor
/// Cached mappable fields of one row type, in declaration order.
///

#[derive(Debug)]
pub struct TypeDescriptor {
    path: &'static str,
    sheet_name: Option<&'static str>,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Walk a row model and keep the fields that carry column metadata.
    #[must_use]
    pub fn discover(model: &'static RowModel) -> Self {
        let fields = (0..model.fields.len())
            .filter_map(|index| FieldDescriptor::new(model, index))
            .collect();

        Self {
            path: model.path,
            sheet_name: model.sheet_name,
            fields,
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[must_use]
    pub const fn sheet_name(&self) -> Option<&'static str> {
        self.sheet_name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

///
/// FieldCache
///
/// Read-through cache of type descriptors keyed by type path. Safe to
/// share across threads; concurrent first lookups of the same type build
/// equivalent descriptors and exactly one is kept.
///

#[derive(Debug, Default)]
pub struct FieldCache {
    types: DashMap<&'static str, Arc<TypeDescriptor>>,
}

impl FieldCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for a row type, discovering it on first use.
    #[must_use]
    pub fn fields<R: Row>(&self) -> Arc<TypeDescriptor> {
        self.descriptor(R::MODEL)
    }

    /// Descriptor for a row model, discovering it on first use.
    #[must_use]
    pub fn descriptor(&self, model: &'static RowModel) -> Arc<TypeDescriptor> {
        if let Some(cached) = self.types.get(model.path) {
            return Arc::clone(cached.value());
        }

        let entry = self.types.entry(model.path).or_insert_with(|| {
            let descriptor = TypeDescriptor::discover(model);
            tracing::debug!(
                row = model.path,
                declared = model.fields.len(),
                mapped = descriptor.len(),
                "discovered row fields"
            );

            Arc::new(descriptor)
        });

        Arc::clone(entry.value())
    }

    /// Number of row types discovered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.types.contains_key(path)
    }
}

///
/// TESTS
///
