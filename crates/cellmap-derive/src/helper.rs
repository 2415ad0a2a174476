use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Quote an `Option`, applying the transform to the inner value when present.
pub fn quote_option<T, F>(opt: Option<&T>, transform: F) -> TokenStream
where
    F: FnOnce(&T) -> TokenStream,
{
    if let Some(v) = opt {
        let transformed = transform(v);
        quote!(::core::option::Option::Some(#transformed))
    } else {
        quote!(::core::option::Option::None)
    }
}

/// Pass through a tokenizable value unchanged.
pub fn as_tokens<T: ToTokens>(t: &T) -> TokenStream {
    quote!(#t)
}

/// Source text of a type with whitespace removed (`Option<String>`).
pub fn type_text<T: ToTokens>(t: &T) -> String {
    t.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
