//! Procedural macros for `argbind`.
//!
//! `#[derive(Options)]` implements `argbind::Options` for a struct with
//! named fields. Every field is registered in declaration order under its
//! own name; an `#[argbind("...")]` attribute supplies the field tag
//! (help text, keys and placeholder).

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `argbind::Options`.
///
/// Fields must be visible outside the struct and hold a scalar type.
/// Collections, `Option`, tuples and references are rejected at expansion
/// time; other non-scalar types fail the `argbind::decode::Scalar` bound.
///
/// The struct attribute `#[argbind(crate = "path")]` points the generated
/// code at a renamed dependency.
#[proc_macro_derive(Options, attributes(argbind))]
pub fn derive_options(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
