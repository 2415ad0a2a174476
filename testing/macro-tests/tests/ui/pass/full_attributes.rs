use cellmap::{
    __reexports::{rust_decimal::Decimal, time::Date},
    prelude::*,
};

#[derive(Default)]
struct Upper;

impl Converter for Upper {
    fn write(&self, value: &Value) -> Result<String, ConvertError> {
        value
            .as_text()
            .map(str::to_uppercase)
            .ok_or_else(|| ConvertError::custom("expected text"))
    }

    fn read(&self, text: &str) -> Result<Value, ConvertError> {
        Ok(Value::from(text.to_lowercase()))
    }
}

#[derive(Default, Row)]
#[sheet(name = "Everything")]
struct Everything {
    #[column(name = "Code", order = 0, read_order = 3, write_order = 1, converter = "Upper")]
    code: String,

    #[column(name = "Amount", order = 1, write_order = 0)]
    amount: Decimal,

    #[column(name = "On", order = 2, date_pattern = "yyyy/MM/dd")]
    on: Option<Date>,

    #[column(order = 4)]
    count: u8,

    #[column(order = 5)]
    ratio: f64,

    #[column(order = 6)]
    tiny: i8,
}

fn main() {
    let mapper = SheetMapper::new();
    assert_eq!(
        mapper.write_column_names::<Everything>(),
        ["Amount", "Code", "On", "count", "ratio", "tiny"]
    );
    assert_eq!(mapper.sheet_name(&Everything::default()), "Everything");
}
