//! Date patterns.
//!
//! A pattern is either a `time` format description (`[year]-[month]-[day]`)
//! or the letter style common in spreadsheet tooling (`yyyy-MM-dd HH:mm`),
//! which is translated into a format description before compiling. A
//! pattern is a format description when it opens with `[` or has a `[`
//! outside a quoted literal.

use crate::{
    error::ConvertError,
    value::{FieldKind, Value},
};
use time::{
    Date, PrimitiveDateTime,
    format_description::{self, OwnedFormatItem},
};

///
/// DatePattern
///

#[derive(Debug)]
pub struct DatePattern {
    source: String,
    format: OwnedFormatItem,
}

impl DatePattern {
    /// Compile a pattern in either accepted syntax.
    pub fn compile(pattern: &str) -> Result<Self, ConvertError> {
        let description = if is_description(pattern) {
            pattern.to_string()
        } else {
            translate_letters(pattern)?
        };

        let format = format_description::parse_owned::<1>(&description).map_err(|err| {
            ConvertError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            source: pattern.to_string(),
            format,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Format a date or date-time value.
    pub fn format(&self, value: &Value) -> Result<String, ConvertError> {
        let (kind, result) = match value {
            Value::Date(date) => (FieldKind::Date, date.format(&self.format)),
            Value::DateTime(stamp) => (FieldKind::DateTime, stamp.format(&self.format)),
            other => {
                return Err(ConvertError::Format {
                    kind: other.kind().unwrap_or(FieldKind::Other),
                    reason: format!("date pattern '{}' applies to dates only", self.source),
                });
            }
        };

        result.map_err(|err| ConvertError::Format {
            kind,
            reason: err.to_string(),
        })
    }

    /// Parse text into a value of `kind` (date or date-time).
    pub fn parse(&self, kind: FieldKind, text: &str) -> Result<Value, ConvertError> {
        match kind {
            FieldKind::Date => Date::parse(text, &self.format)
                .map(Value::Date)
                .map_err(|err| ConvertError::invalid_text(kind, text, err)),
            FieldKind::DateTime => PrimitiveDateTime::parse(text, &self.format)
                .map(Value::DateTime)
                .map_err(|err| ConvertError::invalid_text(kind, text, err)),
            _ => Err(ConvertError::invalid_text(
                kind,
                text,
                format!("date pattern '{}' applies to dates only", self.source),
            )),
        }
    }
}

// is_description
// a `[` outside quotes only means something to the description syntax
fn is_description(pattern: &str) -> bool {
    if pattern.starts_with('[') {
        return true;
    }

    let mut quoted = false;
    pattern.chars().any(|c| {
        if c == '\'' {
            quoted = !quoted;
        }
        c == '[' && !quoted
    })
}

// translate_letters
// `yyyy-MM-dd` style → `[year]-[month]-[day]`
fn translate_letters(pattern: &str) -> Result<String, ConvertError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            i = quoted_literal(pattern, &chars, i, &mut out)?;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&r| r == c).count();
        out.push_str(&component(pattern, c, run)?);
        i += run;
    }

    Ok(out)
}

// quoted_literal
// copies the literal opened at `start`; returns the index after it
fn quoted_literal(
    pattern: &str,
    chars: &[char],
    start: usize,
    out: &mut String,
) -> Result<usize, ConvertError> {
    // '' outside a literal is one quote
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return Ok(start + 2);
    }

    let mut i = start + 1;
    while let Some(&c) = chars.get(i) {
        if c == '\'' {
            // '' inside a literal is one quote too
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            return Ok(i + 1);
        }
        push_literal(out, c);
        i += 1;
    }

    Err(invalid(pattern, "unterminated quoted literal"))
}

fn component(pattern: &str, letter: char, run: usize) -> Result<String, ConvertError> {
    let padded = |name: &str| {
        if run == 1 {
            format!("[{name} padding:none]")
        } else {
            format!("[{name}]")
        }
    };

    let component = match letter {
        'y' | 'u' if run == 2 => "[year repr:last_two]".to_string(),
        'y' | 'u' => "[year]".to_string(),
        'M' if run == 3 => "[month repr:short]".to_string(),
        'M' if run >= 4 => "[month repr:long]".to_string(),
        'M' => padded("month"),
        'd' => padded("day"),
        'D' => "[ordinal]".to_string(),
        'H' => padded("hour"),
        'h' if run == 1 => "[hour repr:12 padding:none]".to_string(),
        'h' => "[hour repr:12]".to_string(),
        'm' => padded("minute"),
        's' => padded("second"),
        'S' if run <= 9 => format!("[subsecond digits:{run}]"),
        'a' => "[period]".to_string(),
        'E' if run <= 3 => "[weekday repr:short]".to_string(),
        'E' => "[weekday repr:long]".to_string(),
        other => {
            return Err(invalid(
                pattern,
                &format!("unsupported pattern letter '{other}' (x{run})"),
            ));
        }
    };

    Ok(component)
}

fn push_literal(out: &mut String, c: char) {
    if c == '[' {
        out.push_str("[[");
    } else {
        out.push(c);
    }
}

fn invalid(pattern: &str, reason: &str) -> ConvertError {
    ConvertError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

///
/// TESTS
///
