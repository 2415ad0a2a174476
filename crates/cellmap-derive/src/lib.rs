//! Derive macros for cellmap.
use proc_macro::TokenStream;

mod helper;
mod row;

/// Derive `cellmap::traits::Row` for a struct with named fields.
///
/// ```ignore
/// #[derive(Default, Row)]
/// #[sheet(name = "People")]
/// struct Person {
///     #[column(name = "Name", order = 0)]
///     name: String,
///     #[column(name = "Age", order = 1, write_order = 4)]
///     age: i32,
///     scratch: Vec<u8>, // not mapped
/// }
/// ```
#[proc_macro_derive(Row, attributes(sheet, column))]
pub fn derive_row(input: TokenStream) -> TokenStream {
    row::derive_row(input.into()).into()
}
