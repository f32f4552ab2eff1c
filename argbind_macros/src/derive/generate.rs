//! Code generation for the `Options` implementation.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::{FieldSpec, OptionsInput};

/// One `FieldSet::field` call, propagating registration errors.
fn register_call(field: &FieldSpec) -> TokenStream {
    let FieldSpec { ident, name, tag } = field;
    let tag_tokens = tag.as_ref().map_or_else(
        || quote! { ::core::option::Option::None },
        |lit| quote! { ::core::option::Option::Some(#lit) },
    );
    quote! {
        __argbind_fields.field(#name, #tag_tokens, &mut self.#ident)?;
    }
}

/// Generates `impl Options` registering every field in declaration order.
pub(crate) fn options_impl(input: &OptionsInput) -> TokenStream {
    let krate = crate_path::runtime_crate(&input.attrs);
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let calls = input.fields.iter().map(register_call);
    quote! {
        impl #impl_generics #krate::Options for #ident #ty_generics #where_clause {
            fn register<'__argbind>(
                &'__argbind mut self,
                __argbind_fields: &mut #krate::FieldSet<'__argbind>,
            ) -> ::core::result::Result<(), #krate::ConfigError> {
                #( #calls )*
                ::core::result::Result::Ok(())
            }
        }
    }
}
