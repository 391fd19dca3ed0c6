//! Derive macro for parsing plain structs from delimited text.
//!
//! The macro reads the struct declaration itself, so the field count and
//! field types never need to be repeated by hand.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, parse_quote};

const MAX_FIELDS: usize = 32;

/// Derives the `Record` trait from a struct's field declarations.
///
/// Named, tuple, and unit structs are supported, up to 32 fields; every
/// field type must implement `FromField`. Fields parse in declaration
/// order. The optional `#[record(validate = "path")]` attribute names a
/// `fn(&Self) -> rowcast::Result<()>` to run as the validation hook.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs",
        ));
    };

    let field_count = data.fields.iter().count();
    if field_count > MAX_FIELDS {
        return Err(syn::Error::new_spanned(
            &data.fields,
            format!("Record structs are limited to {MAX_FIELDS} fields"),
        ));
    }

    let body = match &data.fields {
        Fields::Named(fields) => {
            let parsers = fields.named.iter().map(|field| {
                let name = &field.ident;
                let ty = &field.ty;
                quote! { #name: fields.next_field::<#ty>()? }
            });
            quote! { Ok(Self { #(#parsers),* }) }
        }
        Fields::Unnamed(fields) => {
            let parsers = fields.unnamed.iter().map(|field| {
                let ty = &field.ty;
                quote! { fields.next_field::<#ty>()? }
            });
            quote! { Ok(Self(#(#parsers),*)) }
        }
        Fields::Unit => quote! { Ok(Self) },
    };

    let validate = match validate_hook(&input.attrs)? {
        Some(path) => quote! {
            fn validate(&self) -> ::rowcast::Result<()> {
                #path(self)
            }
        },
        None => TokenStream2::new(),
    };

    let name = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::rowcast::FromField));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::rowcast::Record for #name #ty_generics #where_clause {
            const FIELD_COUNT: usize = #field_count;

            fn from_fields(fields: &mut ::rowcast::Fields<'_>) -> ::rowcast::Result<Self> {
                #body
            }

            #validate
        }
    })
}

/// Extracts the hook path from `#[record(validate = "path")]`, if present.
fn validate_hook(attrs: &[syn::Attribute]) -> syn::Result<Option<syn::Path>> {
    let mut hook = None;
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("validate") {
                let value: LitStr = meta.value()?.parse()?;
                hook = Some(value.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute"))
            }
        })?;
    }
    Ok(hook)
}
