//! Value converter registry.
//!
//! Resolution order, identical in both directions:
//! 1. a custom converter declared on the column, built once per converter
//!    and reused after the first successful construction,
//! 2. the column's date pattern, for date and date-time fields,
//! 3. the built-in conversion of the field kind.
//!
//! Null never reaches a converter: it writes as empty text, and empty text
//! reads as null for nullable fields when `empty_as_null` is set. Text
//! fields keep whitespace-only cells as text; other kinds treat them as
//! empty when `trim_numeric` is set.

pub mod builtin;
pub mod pattern;

use crate::{
    cache::FieldDescriptor,
    config::MapperConfig,
    error::ConvertError,
    model::ConverterModel,
    traits::Converter,
    value::{FieldKind, Value},
};
use dashmap::DashMap;
use pattern::DatePattern;
use std::{any::TypeId, fmt, sync::Arc};

/// Build a default-constructed converter; the `build` target emitted for
/// `#[column(converter = "...")]`.
pub fn build_default<C>() -> Result<Box<dyn Converter>, ConvertError>
where
    C: Converter + Default + 'static,
{
    Ok(Box::new(C::default()))
}

///
/// ConverterRegistry
///
/// Holds converter instances keyed by converter type and compiled date
/// patterns keyed by pattern string. A failed construction is not cached.
///

pub struct ConverterRegistry {
    trim_numeric: bool,
    empty_as_null: bool,
    converters: DashMap<TypeId, Arc<dyn Converter>>,
    patterns: DashMap<&'static str, Arc<DatePattern>>,
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("trim_numeric", &self.trim_numeric)
            .field("empty_as_null", &self.empty_as_null)
            .field("converters", &self.converters.len())
            .field("patterns", &self.patterns.len())
            .finish()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new(&MapperConfig::default())
    }
}

impl ConverterRegistry {
    #[must_use]
    pub fn new(config: &MapperConfig) -> Self {
        Self {
            trim_numeric: config.trim_numeric,
            empty_as_null: config.empty_as_null,
            converters: DashMap::new(),
            patterns: DashMap::new(),
        }
    }

    /// Render one field value as cell text.
    pub fn to_cell_text(
        &self,
        field: &FieldDescriptor,
        value: &Value,
    ) -> Result<String, ConvertError> {
        if value.is_null() {
            return Ok(String::new());
        }

        if let Some(converter) = field.converter() {
            return self.converter(converter)?.write(value);
        }

        if let Some(pattern) = self.temporal_pattern(field)? {
            return pattern.format(value);
        }

        builtin::format_value(value)
    }

    /// Parse cell text into a value for one field.
    pub fn from_cell_text(
        &self,
        field: &FieldDescriptor,
        text: &str,
    ) -> Result<Value, ConvertError> {
        if field.nullable() && self.empty_as_null && self.is_empty_cell(field.kind(), text) {
            return Ok(Value::Null);
        }

        if let Some(converter) = field.converter() {
            return self.converter(converter)?.read(text);
        }

        if let Some(pattern) = self.temporal_pattern(field)? {
            let text = if self.trim_numeric { text.trim() } else { text };
            return pattern.parse(field.kind(), text);
        }

        builtin::parse_text(field.kind(), text, self.trim_numeric)
    }

    // is_empty_cell
    // text kinds are never trimmed, so only exact "" counts
    fn is_empty_cell(&self, kind: FieldKind, text: &str) -> bool {
        match kind {
            FieldKind::Text | FieldKind::Other => text.is_empty(),
            _ if self.trim_numeric => text.trim().is_empty(),
            _ => text.is_empty(),
        }
    }

    /// Shared converter instance, constructed on first use.
    pub fn converter(&self, model: &ConverterModel) -> Result<Arc<dyn Converter>, ConvertError> {
        let key = model.converter_type();
        if let Some(cached) = self.converters.get(&key) {
            return Ok(Arc::clone(cached.value()));
        }

        let built: Arc<dyn Converter> = Arc::from(model.instantiate()?);
        let entry = self.converters.entry(key).or_insert(built);
        tracing::debug!(converter = model.name, "converter constructed");

        Ok(Arc::clone(entry.value()))
    }

    /// Compiled pattern of a date field, if it declares one.
    fn temporal_pattern(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<Arc<DatePattern>>, ConvertError> {
        match field.date_pattern() {
            Some(pattern) if field.kind().is_temporal() => self.pattern(pattern).map(Some),
            _ => Ok(None),
        }
    }

    /// Compile a pattern once and reuse it.
    pub fn pattern(&self, pattern: &'static str) -> Result<Arc<DatePattern>, ConvertError> {
        if let Some(cached) = self.patterns.get(pattern) {
            return Ok(Arc::clone(cached.value()));
        }

        let compiled = Arc::new(DatePattern::compile(pattern)?);
        let entry = self.patterns.entry(pattern).or_insert(compiled);

        Ok(Arc::clone(entry.value()))
    }

    /// Number of converter instances held.
    #[must_use]
    pub fn converter_count(&self) -> usize {
        self.converters.len()
    }

    /// Number of compiled patterns held.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

///
/// TESTS
///
