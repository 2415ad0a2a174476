mod cell;

use crate::{
    error::ConvertError,
    model::RowModel,
    value::{FieldKind, Value},
};

// ============================================================================
// FIELD VALUES
// ============================================================================
//
// These traits describe how one field's native type crosses into the
// type-erased `Value` that converters work with.
//

///
/// CellValue
///
/// A field type that can be carried as a `Value`.
///
/// `KIND` selects the built-in text conversion. `NULLABLE` is true for
/// `Option<T>`, whose `None` travels as `Value::Null`.
///

pub trait CellValue: Sized {
    const KIND: FieldKind;
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;

    /// Rebuild the field from a value, `None` when the variant does not fit.
    fn from_value(value: Value) -> Option<Self>;

    /// Rebuild the field from a value, saying why when it does not fit.
    ///
    /// Defaults to a `TypeMismatch` on `field`. Types that parse text
    /// override it to surface their own parse error.
    fn try_from_value(field: &'static str, value: Value) -> Result<Self, ConvertError> {
        let found = value.label();

        Self::from_value(value).ok_or(ConvertError::TypeMismatch {
            field,
            expected: Self::KIND,
            found,
        })
    }
}

/// Assign a converted value into a field slot.
///
/// Called by generated `Row::set_value` arms; the slot is left untouched
/// when the value does not fit the field's type.
pub fn assign_value<T: CellValue>(
    slot: &mut T,
    field: &'static str,
    value: Value,
) -> Result<(), ConvertError> {
    *slot = T::try_from_value(field, value)?;

    Ok(())
}

// ============================================================================
// ROWS
// ============================================================================

///
/// Row
///
/// A plain data type mapped to one spreadsheet row.
///
/// `MODEL.fields` lists every declared field in declaration order;
/// `get_value`/`set_value` take an index into that slice and only answer
/// for fields that carry column metadata.
///

pub trait Row: Default + Sized + 'static {
    const MODEL: &'static RowModel;

    fn get_value(&self, index: usize) -> Option<Value>;

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConvertError>;
}

// ============================================================================
// CONVERTERS
// ============================================================================

///
/// Converter
///
/// User-supplied bidirectional conversion for one field, replacing the
/// built-in conversion of the field's kind. Never sees `Value::Null`.
///

pub trait Converter: Send + Sync {
    fn write(&self, value: &Value) -> Result<String, ConvertError>;

    fn read(&self, text: &str) -> Result<Value, ConvertError>;
}
