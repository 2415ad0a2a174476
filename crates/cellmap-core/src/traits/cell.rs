use crate::{
    error::ConvertError,
    traits::CellValue,
    value::{FieldKind, Value},
};
use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime};

// impl_cell_value
// one built-in field type per variant, matched exactly
macro_rules! impl_cell_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl CellValue for $ty {
                const KIND: FieldKind = FieldKind::$variant;

                fn to_value(&self) -> Value {
                    Value::$variant(Clone::clone(self))
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_cell_value! {
    String => Text,
    Decimal => Decimal,
    i64 => Long,
    i32 => Int,
    i16 => Short,
    i8 => Byte,
    u8 => UByte,
    f64 => Double,
    f32 => Float,
    bool => Bool,
    Date => Date,
    PrimitiveDateTime => DateTime,
}

impl<T: CellValue> CellValue for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, CellValue::to_value)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn try_from_value(field: &'static str, value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Null => Ok(None),
            other => T::try_from_value(field, other).map(Some),
        }
    }
}

///
/// TESTS
///
