use crate::helper::{as_tokens, quote_option, type_text};
use darling::{Error as DarlingError, FromMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, Ident, Meta, Path};

///
/// SheetArgs
/// `#[sheet(name = "...")]` on the struct.
///

#[derive(Debug, Default, FromMeta)]
struct SheetArgs {
    #[darling(default)]
    name: Option<String>,
}

///
/// ColumnArgs
///
/// `#[column(...)]` on a field. Every key is optional and a bare
/// `#[column]` maps the field under its own name with no order.
///

#[derive(Debug, Default, FromMeta)]
struct ColumnArgs {
    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    order: Option<u32>,

    #[darling(default)]
    read_order: Option<u32>,

    #[darling(default)]
    write_order: Option<u32>,

    #[darling(default)]
    converter: Option<Path>,

    #[darling(default)]
    date_pattern: Option<String>,
}

///
/// RowField
/// One declared field and, when annotated, its column arguments.
///

struct RowField<'a> {
    index: usize,
    ident: &'a Ident,
    field: &'a Field,
    column: Option<ColumnArgs>,
}

impl RowField<'_> {
    fn model(&self) -> TokenStream {
        let name = self.ident.to_string();
        let type_name = type_text(&self.field.ty);
        let column = quote_option(self.column.as_ref(), |args| self.column_model(args));

        quote! {
            ::cellmap::model::FieldModel {
                name: #name,
                type_name: #type_name,
                column: #column,
            }
        }
    }

    fn column_model(&self, args: &ColumnArgs) -> TokenStream {
        let ty = &self.field.ty;
        let name = args.name.clone().unwrap_or_else(|| self.ident.to_string());
        let order = quote_option(args.order.as_ref(), as_tokens);
        let read_order = quote_option(args.read_order.as_ref(), as_tokens);
        let write_order = quote_option(args.write_order.as_ref(), as_tokens);
        let date_pattern = quote_option(args.date_pattern.as_ref(), as_tokens);
        let converter = quote_option(args.converter.as_ref(), |path| {
            let converter_name = type_text(path);

            quote! {
                ::cellmap::model::ConverterModel::of::<#path>(#converter_name)
            }
        });

        quote! {
            ::cellmap::model::ColumnModel {
                name: #name,
                kind: <#ty as ::cellmap::traits::CellValue>::KIND,
                nullable: <#ty as ::cellmap::traits::CellValue>::NULLABLE,
                order: #order,
                read_order: #read_order,
                write_order: #write_order,
                converter: #converter,
                date_pattern: #date_pattern,
            }
        }
    }

    fn get_arm(&self) -> Option<TokenStream> {
        self.column.as_ref()?;
        let (index, ident) = (self.index, self.ident);

        Some(quote! {
            #index => ::core::option::Option::Some(
                ::cellmap::traits::CellValue::to_value(&self.#ident)
            ),
        })
    }

    fn set_arm(&self) -> Option<TokenStream> {
        self.column.as_ref()?;
        let (index, ident) = (self.index, self.ident);
        let name = ident.to_string();

        Some(quote! {
            #index => ::cellmap::traits::assign_value(&mut self.#ident, #name, value),
        })
    }
}

// derive_row
pub fn derive_row(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, DarlingError> {
    let ident = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(ident, "Row can only be derived for structs with named fields").into());
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "Row can only be derived for structs with named fields",
        )
        .into());
    };
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(&input.generics, "Row cannot be derived for generic structs").into());
    }

    let sheet = parse_args::<SheetArgs>(&input.attrs, "sheet")?.unwrap_or_default();

    let mut errors = DarlingError::accumulator();
    let mut fields = Vec::with_capacity(named.named.len());
    for (index, field) in named.named.iter().enumerate() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        if let Some(column) = errors.handle(parse_args::<ColumnArgs>(&field.attrs, "column")) {
            fields.push(RowField {
                index,
                ident: field_ident,
                field,
                column,
            });
        }
    }
    errors.finish()?;

    let sheet_name = quote_option(sheet.name.as_ref(), as_tokens);
    let models = fields.iter().map(RowField::model);
    let get_arms = fields.iter().filter_map(RowField::get_arm);
    let set_arms = fields.iter().filter_map(RowField::set_arm);

    Ok(quote! {
        #[automatically_derived]
        impl ::cellmap::traits::Row for #ident {
            const MODEL: &'static ::cellmap::model::RowModel = &::cellmap::model::RowModel {
                path: ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)),
                sheet_name: #sheet_name,
                fields: &[#(#models),*],
            };

            fn get_value(&self, index: usize) -> ::core::option::Option<::cellmap::value::Value> {
                match index {
                    #(#get_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn set_value(
                &mut self,
                index: usize,
                value: ::cellmap::value::Value,
            ) -> ::core::result::Result<(), ::cellmap::error::ConvertError> {
                match index {
                    #(#set_arms)*
                    _ => ::core::result::Result::Err(
                        ::cellmap::error::ConvertError::UnknownField { index }
                    ),
                }
            }
        }
    })
}

/// Parse the single attribute named `name`, if present.
///
/// A bare `#[name]` yields the default arguments.
fn parse_args<T>(attrs: &[Attribute], name: &str) -> Result<Option<T>, DarlingError>
where
    T: FromMeta + Default,
{
    let mut found = attrs.iter().filter(|attr| attr.path().is_ident(name));
    let Some(attr) = found.next() else {
        return Ok(None);
    };
    if let Some(extra) = found.next() {
        return Err(DarlingError::custom(format!("duplicate #[{name}] attribute")).with_span(extra));
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(T::default())),
        meta @ Meta::List(_) => T::from_meta(meta).map(Some),
        Meta::NameValue(_) => Err(
            DarlingError::custom(format!("expected #[{name}(...)]")).with_span(attr),
        ),
    }
}
