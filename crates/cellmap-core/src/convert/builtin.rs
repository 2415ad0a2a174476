//! Built-in text conversions keyed by `FieldKind`.

use crate::{
    error::ConvertError,
    value::{FieldKind, Value},
};
use rust_decimal::Decimal;
use std::{fmt::Display, str::FromStr};
use time::{Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

///
/// CONSTANTS
///

/// Canonical date text when no pattern is configured.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Canonical date-time text when no pattern is configured.
pub const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Render a non-null value as cell text.
pub fn format_value(value: &Value) -> Result<String, ConvertError> {
    let text = match value {
        Value::Null => String::new(),
        Value::Text(text) => text.clone(),
        Value::Decimal(v) => v.to_string(),
        Value::Long(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Short(v) => v.to_string(),
        Value::Byte(v) => v.to_string(),
        Value::UByte(v) => v.to_string(),
        Value::Double(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Date(v) => v.format(DATE_FORMAT).map_err(|err| ConvertError::Format {
            kind: FieldKind::Date,
            reason: err.to_string(),
        })?,
        Value::DateTime(v) => v
            .format(DATE_TIME_FORMAT)
            .map_err(|err| ConvertError::Format {
                kind: FieldKind::DateTime,
                reason: err.to_string(),
            })?,
    };

    Ok(text)
}

/// Parse cell text for a field of `kind`.
///
/// Text and `Other` kinds keep the raw text; numeric and boolean kinds are
/// trimmed first when `trim` is set.
pub fn parse_text(kind: FieldKind, text: &str, trim: bool) -> Result<Value, ConvertError> {
    let scalar = if trim { text.trim() } else { text };

    let value = match kind {
        FieldKind::Text | FieldKind::Other => Value::Text(text.to_string()),
        FieldKind::Decimal => Value::Decimal(parse_number::<Decimal>(kind, scalar)?),
        FieldKind::Long => Value::Long(parse_number(kind, scalar)?),
        FieldKind::Int => Value::Int(parse_number(kind, scalar)?),
        FieldKind::Short => Value::Short(parse_number(kind, scalar)?),
        FieldKind::Byte => Value::Byte(parse_number(kind, scalar)?),
        FieldKind::UByte => Value::UByte(parse_number(kind, scalar)?),
        FieldKind::Double => Value::Double(parse_number(kind, scalar)?),
        FieldKind::Float => Value::Float(parse_number(kind, scalar)?),
        FieldKind::Bool => Value::Bool(parse_bool(scalar)?),
        FieldKind::Date => Value::Date(
            Date::parse(scalar, DATE_FORMAT)
                .map_err(|err| ConvertError::invalid_text(kind, text, err))?,
        ),
        FieldKind::DateTime => Value::DateTime(
            PrimitiveDateTime::parse(scalar, DATE_TIME_FORMAT)
                .map_err(|err| ConvertError::invalid_text(kind, text, err))?,
        ),
    };

    Ok(value)
}

fn parse_number<T>(kind: FieldKind, text: &str) -> Result<T, ConvertError>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse::<T>()
        .map_err(|err| ConvertError::invalid_text(kind, text, err))
}

fn parse_bool(text: &str) -> Result<bool, ConvertError> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConvertError::invalid_text(
            FieldKind::Bool,
            text,
            "expected 'true' or 'false'",
        ))
    }
}

///
/// TESTS
///
