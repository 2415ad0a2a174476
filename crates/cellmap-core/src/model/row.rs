use crate::model::field::FieldModel;

///
/// RowModel
/// Minimal, macro-generated runtime model for one row type.
///

#[derive(Debug)]
pub struct RowModel {
    /// Fully-qualified Rust type path (cache key and diagnostics).
    pub path: &'static str,
    /// Declared sheet name, if any.
    pub sheet_name: Option<&'static str>,
    /// Every declared field in declaration order, mapped or not.
    pub fields: &'static [FieldModel],
}

impl RowModel {
    /// Number of fields that carry column metadata.
    #[must_use]
    pub fn mapped_len(&self) -> usize {
        self.fields.iter().filter(|f| f.is_mapped()).count()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}
