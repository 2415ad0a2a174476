
use derive_more::{Display, From};
use rust_decimal::Decimal;
use time::{Date, PrimitiveDateTime};

///
/// FieldKind
///
/// Declared type family of a mapped field. Selects the built-in text
/// conversion; `Other` covers types converted through `Display`/`FromStr`.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum FieldKind {
    #[display("text")]
    Text,
    #[display("decimal")]
    Decimal,
    #[display("long")]
    Long,
    #[display("int")]
    Int,
    #[display("short")]
    Short,
    #[display("byte")]
    Byte,
    #[display("unsigned byte")]
    UByte,
    #[display("double")]
    Double,
    #[display("float")]
    Float,
    #[display("bool")]
    Bool,
    #[display("date")]
    Date,
    #[display("date-time")]
    DateTime,
    #[display("other")]
    Other,
}

impl FieldKind {
    /// Whether a configured date pattern applies to this kind.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Decimal
                | Self::Long
                | Self::Int
                | Self::Short
                | Self::Byte
                | Self::UByte
                | Self::Double
                | Self::Float
        )
    }
}

///
/// Value
///
/// Type-erased field value moved between a row and the converters.
/// `Null` is the absent value of a nullable field; `Text` also carries
/// values of `FieldKind::Other`.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum Value {
    #[from(ignore)]
    Null,
    Text(String),
    Decimal(Decimal),
    Long(i64),
    Int(i32),
    Short(i16),
    Byte(i8),
    UByte(u8),
    Double(f64),
    Float(f32),
    Bool(bool),
    Date(Date),
    DateTime(PrimitiveDateTime),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Kind of the carried value, `None` for `Null`.
    ///
    /// `Text` reports `FieldKind::Text`; text standing in for an
    /// `Other` field is indistinguishable at this level.
    #[must_use]
    pub const fn kind(&self) -> Option<FieldKind> {
        let kind = match self {
            Self::Null => return None,
            Self::Text(_) => FieldKind::Text,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Long(_) => FieldKind::Long,
            Self::Int(_) => FieldKind::Int,
            Self::Short(_) => FieldKind::Short,
            Self::Byte(_) => FieldKind::Byte,
            Self::UByte(_) => FieldKind::UByte,
            Self::Double(_) => FieldKind::Double,
            Self::Float(_) => FieldKind::Float,
            Self::Bool(_) => FieldKind::Bool,
            Self::Date(_) => FieldKind::Date,
            Self::DateTime(_) => FieldKind::DateTime,
        };

        Some(kind)
    }

    /// Short variant label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Decimal(_) => "decimal",
            Self::Long(_) => "long",
            Self::Int(_) => "int",
            Self::Short(_) => "short",
            Self::Byte(_) => "byte",
            Self::UByte(_) => "unsigned byte",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::DateTime(_) => "date-time",
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
