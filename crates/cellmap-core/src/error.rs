use crate::value::FieldKind;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// ErrorClass
///
/// Stable classification for every failure the mapper can report.
/// None of these abort a bulk read or write; they are reported and the
/// affected field degrades.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    /// Column metadata cannot be resolved (missing or duplicate order,
    /// invalid date pattern).
    #[display("configuration")]
    Configuration,

    /// Cell text or a field value could not be converted.
    #[display("conversion")]
    Conversion,

    /// A converter could not be constructed.
    #[display("instantiation")]
    Instantiation,

    /// A field could not be read from or written to the row value.
    #[display("access")]
    Access,
}

///
/// MappingError
///
/// A classified failure located at one row type and, usually, one field.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{class} error at {}: {message}", location(.row, .field))]
pub struct MappingError {
    pub class: ErrorClass,
    pub row: &'static str,
    pub field: Option<&'static str>,
    pub message: String,
}

impl MappingError {
    pub fn new(
        class: ErrorClass,
        row: &'static str,
        field: Option<&'static str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class,
            row,
            field,
            message: message.into(),
        }
    }

    /// Construct a configuration error for one field.
    pub fn configuration(
        row: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorClass::Configuration, row, Some(field), message)
    }

    /// Construct an access error for one field.
    pub fn access(row: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Access, row, Some(field), message)
    }

    /// Locate a conversion-level error at one field, keeping its class.
    #[must_use]
    pub fn from_convert(row: &'static str, field: &'static str, err: &ConvertError) -> Self {
        Self::new(err.class(), row, Some(field), err.to_string())
    }
}

#[allow(clippy::ref_option)]
fn location(row: &str, field: &Option<&'static str>) -> String {
    match field {
        Some(field) => format!("{row}.{field}"),
        None => row.to_string(),
    }
}

///
/// ConvertError
///
/// Failures raised while turning cell text into values and back.
/// Converters return this type; `Custom` carries free-form messages.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConvertError {
    #[error("cannot read '{text}' as {kind}: {reason}")]
    InvalidText {
        kind: FieldKind,
        text: String,
        reason: String,
    },

    #[error("cannot format {kind} value: {reason}")]
    Format { kind: FieldKind, reason: String },

    #[error("field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
        found: &'static str,
    },

    #[error("no mapped field at index {index}")]
    UnknownField { index: usize },

    #[error("invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("converter '{converter}' could not be created: {reason}")]
    Instantiation {
        converter: &'static str,
        reason: String,
    },

    #[error("{0}")]
    Custom(String),
}

impl ConvertError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    pub(crate) fn invalid_text(kind: FieldKind, text: &str, reason: impl ToString) -> Self {
        Self::InvalidText {
            kind,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidText { .. }
            | Self::Format { .. }
            | Self::TypeMismatch { .. }
            | Self::Custom(_) => ErrorClass::Conversion,
            Self::UnknownField { .. } => ErrorClass::Access,
            Self::InvalidPattern { .. } => ErrorClass::Configuration,
            Self::Instantiation { .. } => ErrorClass::Instantiation,
        }
    }
}

///
/// TESTS
///
