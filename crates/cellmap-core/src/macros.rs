// text_cell_value
/// Implement `CellValue` for types that round-trip through text.
///
/// Writes use `Display`; reads hand the raw cell text to `FromStr`, whose
/// error must implement `Display` and is reported as `InvalidText`.
/// The field kind is `FieldKind::Other`, so no built-in parsing applies.
#[macro_export]
macro_rules! text_cell_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::traits::CellValue for $ty {
                const KIND: $crate::value::FieldKind = $crate::value::FieldKind::Other;

                fn to_value(&self) -> $crate::value::Value {
                    $crate::value::Value::Text(::std::string::ToString::to_string(self))
                }

                fn from_value(value: $crate::value::Value) -> ::std::option::Option<Self> {
                    match value {
                        $crate::value::Value::Text(text) => {
                            <$ty as ::std::str::FromStr>::from_str(&text).ok()
                        }
                        _ => ::std::option::Option::None,
                    }
                }

                fn try_from_value(
                    field: &'static str,
                    value: $crate::value::Value,
                ) -> ::std::result::Result<Self, $crate::error::ConvertError> {
                    match value {
                        $crate::value::Value::Text(text) => {
                            <$ty as ::std::str::FromStr>::from_str(&text).map_err(|err| {
                                $crate::error::ConvertError::InvalidText {
                                    kind: $crate::value::FieldKind::Other,
                                    reason: ::std::string::ToString::to_string(&err),
                                    text,
                                }
                            })
                        }
                        other => ::std::result::Result::Err(
                            $crate::error::ConvertError::TypeMismatch {
                                field,
                                expected: $crate::value::FieldKind::Other,
                                found: other.label(),
                            },
                        ),
                    }
                }
            }
        )+
    };
}

///
/// TESTS
///
