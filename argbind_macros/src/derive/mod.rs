//! Expansion of `#[derive(Options)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

/// Parses `input` and generates the `Options` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let options = parse::parse_input(input)?;
    Ok(generate::options_impl(&options))
}
