//! Path to the runtime crate as seen from generated code.
//!
//! A dependency renamed in `Cargo.toml` is reached through
//! `#[argbind(crate = "...")]`; otherwise generated code names `::argbind`.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::StructAttrs;

/// The runtime crate path for a struct's settings.
pub(crate) fn runtime_crate(attrs: &StructAttrs) -> TokenStream {
    attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { ::argbind }, |path| quote! { #path })
}
