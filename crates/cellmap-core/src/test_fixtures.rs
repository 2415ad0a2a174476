//! Hand-written row types for unit tests.
//!
//! These implement `Row` with declarative model tables instead of the
//! derive, which lives downstream of this crate.

use crate::{
    error::ConvertError,
    model::{ColumnModel, ConverterModel, FieldModel, RowModel},
    traits::{Converter, Row, assign_value},
    value::{FieldKind, Value},
};
use rust_decimal::Decimal;
use std::any::TypeId;
use time::{Date, PrimitiveDateTime};

// field
// shorthand for a mapped field entry
const fn field(name: &'static str, type_name: &'static str, column: ColumnModel) -> FieldModel {
    FieldModel {
        name,
        type_name,
        column: Some(column),
    }
}

const fn unmapped(name: &'static str, type_name: &'static str) -> FieldModel {
    FieldModel {
        name,
        type_name,
        column: None,
    }
}

///
/// Person
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub notes: Vec<String>,
    pub nickname: Option<String>,
}

impl Row for Person {
    const MODEL: &'static RowModel = &RowModel {
        path: "test_fixtures::Person",
        sheet_name: Some("People"),
        fields: &[
            field("name", "String", ColumnModel::new("Name", FieldKind::Text).order(0)),
            field("age", "i32", ColumnModel::new("Age", FieldKind::Int).order(1)),
            unmapped("notes", "Vec<String>"),
            field(
                "nickname",
                "Option<String>",
                ColumnModel::new("Nickname", FieldKind::Text)
                    .nullable()
                    .order(2),
            ),
        ],
    };

    fn get_value(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(self.name.clone().into()),
            1 => Some(self.age.into()),
            3 => Some(self.nickname.clone().into()),
            _ => None,
        }
    }

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConvertError> {
        match index {
            0 => assign_value(&mut self.name, "name", value),
            1 => assign_value(&mut self.age, "age", value),
            3 => assign_value(&mut self.nickname, "nickname", value),
            _ => Err(ConvertError::UnknownField { index }),
        }
    }
}

///
/// Blank
/// No mapped fields at all.
///

#[derive(Clone, Debug, Default)]
pub struct Blank {
    pub scratch: u64,
}

impl Row for Blank {
    const MODEL: &'static RowModel = &RowModel {
        path: "test_fixtures::Blank",
        sheet_name: None,
        fields: &[unmapped("scratch", "u64")],
    };

    fn get_value(&self, _index: usize) -> Option<Value> {
        None
    }

    fn set_value(&mut self, index: usize, _value: Value) -> Result<(), ConvertError> {
        Err(ConvertError::UnknownField { index })
    }
}

///
/// Sparse
///
/// Every order combination: shared + write override, shared only, none,
/// read only, write only.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sparse {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub e: String,
}

impl Row for Sparse {
    const MODEL: &'static RowModel = &RowModel {
        path: "test_fixtures::Sparse",
        sheet_name: None,
        fields: &[
            field(
                "a",
                "String",
                ColumnModel::new("A", FieldKind::Text).order(2).write_order(5),
            ),
            field("b", "String", ColumnModel::new("B", FieldKind::Text).order(1)),
            field("c", "String", ColumnModel::new("C", FieldKind::Text)),
            field("d", "String", ColumnModel::new("D", FieldKind::Text).read_order(0)),
            field("e", "String", ColumnModel::new("E", FieldKind::Text).write_order(0)),
        ],
    };

    fn get_value(&self, index: usize) -> Option<Value> {
        let value = match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            3 => &self.d,
            4 => &self.e,
            _ => return None,
        };

        Some(value.as_str().into())
    }

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConvertError> {
        match index {
            0 => assign_value(&mut self.a, "a", value),
            1 => assign_value(&mut self.b, "b", value),
            2 => assign_value(&mut self.c, "c", value),
            3 => assign_value(&mut self.d, "d", value),
            4 => assign_value(&mut self.e, "e", value),
            _ => Err(ConvertError::UnknownField { index }),
        }
    }
}

///
/// Tie
/// Two fields sharing one write order.
///

#[derive(Clone, Debug, Default)]
pub struct Tie {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl Row for Tie {
    const MODEL: &'static RowModel = &RowModel {
        path: "test_fixtures::Tie",
        sheet_name: None,
        fields: &[
            field("first", "String", ColumnModel::new("First", FieldKind::Text).order(1)),
            field("second", "String", ColumnModel::new("Second", FieldKind::Text).order(1)),
            field("third", "String", ColumnModel::new("Third", FieldKind::Text).order(0)),
        ],
    };

    fn get_value(&self, index: usize) -> Option<Value> {
        let value = match index {
            0 => &self.first,
            1 => &self.second,
            2 => &self.third,
            _ => return None,
        };

        Some(value.as_str().into())
    }

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConvertError> {
        match index {
            0 => assign_value(&mut self.first, "first", value),
            1 => assign_value(&mut self.second, "second", value),
            2 => assign_value(&mut self.third, "third", value),
            _ => Err(ConvertError::UnknownField { index }),
        }
    }
}

///
/// YesNo
/// Boolean converter writing `Y`/`N`.
///

#[derive(Default)]
pub struct YesNo;

impl Converter for YesNo {
    fn write(&self, value: &Value) -> Result<String, ConvertError> {
        match value {
            Value::Bool(true) => Ok("Y".to_string()),
            Value::Bool(false) => Ok("N".to_string()),
            other => Err(ConvertError::custom(format!(
                "YesNo cannot write {}",
                other.label()
            ))),
        }
    }

    fn read(&self, text: &str) -> Result<Value, ConvertError> {
        match text {
            "Y" => Ok(Value::Bool(true)),
            "N" => Ok(Value::Bool(false)),
            other => Err(ConvertError::custom(format!("YesNo cannot read '{other}'"))),
        }
    }
}

///
/// OnOff
/// Boolean converter writing `on`/`off`.
///

#[derive(Default)]
pub struct OnOff;

impl Converter for OnOff {
    fn write(&self, value: &Value) -> Result<String, ConvertError> {
        match value {
            Value::Bool(true) => Ok("on".to_string()),
            Value::Bool(false) => Ok("off".to_string()),
            other => Err(ConvertError::custom(format!(
                "OnOff cannot write {}",
                other.label()
            ))),
        }
    }

    fn read(&self, text: &str) -> Result<Value, ConvertError> {
        match text {
            "on" => Ok(Value::Bool(true)),
            "off" => Ok(Value::Bool(false)),
            other => Err(ConvertError::custom(format!("OnOff cannot read '{other}'"))),
        }
    }
}

///
/// Broken
/// Converter type whose construction always fails.
///

pub enum Broken {}

pub fn build_broken() -> Result<Box<dyn Converter>, ConvertError> {
    Err(ConvertError::Instantiation {
        converter: "Broken",
        reason: "no default configuration".to_string(),
    })
}

///
/// Ledger
/// One field per conversion path.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    pub amount: Decimal,
    pub count: i64,
    pub ratio: f64,
    pub small: i16,
    pub tiny: i8,
    pub flag: bool,
    pub born: Option<Date>,
    pub stamp: Option<PrimitiveDateTime>,
    pub approved: bool,
    pub broken: bool,
    pub limit: Option<i32>,
}

impl Row for Ledger {
    const MODEL: &'static RowModel = &RowModel {
        path: "test_fixtures::Ledger",
        sheet_name: Some("Ledger"),
        fields: &[
            field("amount", "Decimal", ColumnModel::new("Amount", FieldKind::Decimal).order(0)),
            field("count", "i64", ColumnModel::new("Count", FieldKind::Long).order(1)),
            field("ratio", "f64", ColumnModel::new("Ratio", FieldKind::Double).order(2)),
            field("small", "i16", ColumnModel::new("Small", FieldKind::Short).order(3)),
            field("tiny", "i8", ColumnModel::new("Tiny", FieldKind::Byte).order(4)),
            field("flag", "bool", ColumnModel::new("Flag", FieldKind::Bool).order(5)),
            field(
                "born",
                "Option<Date>",
                ColumnModel::new("Born", FieldKind::Date)
                    .nullable()
                    .order(6)
                    .date_pattern("dd/MM/yyyy"),
            ),
            field(
                "stamp",
                "Option<PrimitiveDateTime>",
                ColumnModel::new("Stamp", FieldKind::DateTime)
                    .nullable()
                    .order(7),
            ),
            field(
                "approved",
                "bool",
                ColumnModel::new("Approved", FieldKind::Bool)
                    .order(8)
                    .converter(ConverterModel::of::<YesNo>("YesNo")),
            ),
            field(
                "broken",
                "bool",
                ColumnModel::new("Broken", FieldKind::Bool)
                    .order(9)
                    .converter(ConverterModel {
                        name: "Broken",
                        type_id: TypeId::of::<Broken>,
                        build: build_broken,
                    }),
            ),
            field(
                "limit",
                "Option<i32>",
                ColumnModel::new("Limit", FieldKind::Int).nullable().order(10),
            ),
        ],
    };

    fn get_value(&self, index: usize) -> Option<Value> {
        let value = match index {
            0 => self.amount.into(),
            1 => self.count.into(),
            2 => self.ratio.into(),
            3 => self.small.into(),
            4 => self.tiny.into(),
            5 => self.flag.into(),
            6 => self.born.into(),
            7 => self.stamp.into(),
            8 => self.approved.into(),
            9 => self.broken.into(),
            10 => self.limit.into(),
            _ => return None,
        };

        Some(value)
    }

    fn set_value(&mut self, index: usize, value: Value) -> Result<(), ConvertError> {
        match index {
            0 => assign_value(&mut self.amount, "amount", value),
            1 => assign_value(&mut self.count, "count", value),
            2 => assign_value(&mut self.ratio, "ratio", value),
            3 => assign_value(&mut self.small, "small", value),
            4 => assign_value(&mut self.tiny, "tiny", value),
            5 => assign_value(&mut self.flag, "flag", value),
            6 => assign_value(&mut self.born, "born", value),
            7 => assign_value(&mut self.stamp, "stamp", value),
            8 => assign_value(&mut self.approved, "approved", value),
            9 => assign_value(&mut self.broken, "broken", value),
            10 => assign_value(&mut self.limit, "limit", value),
            _ => Err(ConvertError::UnknownField { index }),
        }
    }
}
