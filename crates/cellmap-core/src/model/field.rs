use crate::{error::ConvertError, traits::Converter, value::FieldKind};
use std::any::TypeId;

///
/// FieldModel
/// One declared field of a row type.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Rust field name.
    pub name: &'static str,
    /// Declared type as written in the struct (diagnostics only).
    pub type_name: &'static str,
    /// Column metadata; `None` means the field is not mappable.
    pub column: Option<ColumnModel>,
}

impl FieldModel {
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        self.column.is_some()
    }
}

///
/// ColumnModel
///
/// Column metadata for a mappable field.
///
/// `order` is the shared order used by both directions; `read_order` and
/// `write_order` override it for one direction each. Orders are zero-based
/// column indexes.
///

#[derive(Clone, Copy, Debug)]
pub struct ColumnModel {
    /// Column display name (header text).
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
    pub order: Option<u32>,
    pub read_order: Option<u32>,
    pub write_order: Option<u32>,
    pub converter: Option<ConverterModel>,
    pub date_pattern: Option<&'static str>,
}

impl ColumnModel {
    /// Column with no orders, converter or pattern.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
            order: None,
            read_order: None,
            write_order: None,
            converter: None,
            date_pattern: None,
        }
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub const fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub const fn read_order(mut self, order: u32) -> Self {
        self.read_order = Some(order);
        self
    }

    #[must_use]
    pub const fn write_order(mut self, order: u32) -> Self {
        self.write_order = Some(order);
        self
    }

    #[must_use]
    pub const fn converter(mut self, converter: ConverterModel) -> Self {
        self.converter = Some(converter);
        self
    }

    #[must_use]
    pub const fn date_pattern(mut self, pattern: &'static str) -> Self {
        self.date_pattern = Some(pattern);
        self
    }

    /// Write order if set, else the shared order.
    #[must_use]
    pub const fn effective_write_order(&self) -> Option<u32> {
        match self.write_order {
            Some(order) => Some(order),
            None => self.order,
        }
    }

    /// Read order if set, else the shared order.
    #[must_use]
    pub const fn effective_read_order(&self) -> Option<u32> {
        match self.read_order {
            Some(order) => Some(order),
            None => self.order,
        }
    }
}

///
/// ConverterModel
///
/// Reference to a custom converter. The registry calls `build` on first
/// use and shares the instance between every column naming the same
/// converter type; a failing `build` is reported as an instantiation error
/// for that one cell and retried on the next.
///
/// `name` is the converter as written on the column and only feeds
/// diagnostics. Identity is `type_id`.
///

#[derive(Clone, Copy, Debug)]
pub struct ConverterModel {
    pub name: &'static str,
    pub type_id: fn() -> TypeId,
    pub build: fn() -> Result<Box<dyn Converter>, ConvertError>,
}

impl ConverterModel {
    /// Converter type `C`, default-constructed on first use.
    #[must_use]
    pub const fn of<C>(name: &'static str) -> Self
    where
        C: Converter + Default + 'static,
    {
        Self {
            name,
            type_id: TypeId::of::<C>,
            build: crate::convert::build_default::<C>,
        }
    }

    pub fn instantiate(&self) -> Result<Box<dyn Converter>, ConvertError> {
        (self.build)()
    }

    #[must_use]
    pub fn converter_type(&self) -> TypeId {
        (self.type_id)()
    }
}

///
/// TESTS
///
