//! Input parsing for the `Options` derive macro.
//!
//! Gathers the struct identifier, its fields and the `#[argbind]`
//! attributes in one pass and rejects unusable fields eagerly, so
//! expansion fails at the offending field rather than inside generated
//! code.

use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, LitStr, Visibility};

mod type_utils;


use type_utils::unsupported_type;

const ATTR: &str = "argbind";

/// Struct-level `#[argbind(...)]` settings.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for renamed dependencies.
    pub crate_path: Option<syn::Path>,
}

/// One field to register.
pub(crate) struct FieldSpec {
    /// Field identifier as written, raw prefix included.
    pub ident: syn::Ident,
    /// Field name passed to the registry, raw prefix stripped.
    pub name: String,
    /// Tag from `#[argbind("...")]`.
    pub tag: Option<LitStr>,
}

/// Everything the generator needs from the derive input.
pub(crate) struct OptionsInput {
    pub ident: syn::Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<FieldSpec>,
}

fn argbind_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTR))
}

/// Parses struct-level `#[argbind(crate = "...")]` attributes.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in argbind_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                let path: syn::Path =
                    syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unsupported argbind attribute; expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(out)
}

/// Parses the field tag from `#[argbind("...")]`.
///
/// A field carries at most one tag.
pub(crate) fn parse_field_tag(field: &syn::Field) -> syn::Result<Option<LitStr>> {
    let mut tag = None;
    for attr in argbind_attrs(&field.attrs) {
        let lit: LitStr = attr.parse_args()?;
        if tag.replace(lit).is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate argbind tag"));
        }
    }
    Ok(tag)
}

/// Validates one named field and collects its registration data.
fn parse_field(field: &syn::Field) -> syn::Result<FieldSpec> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "Options requires named fields"));
    };
    let name = ident.unraw().to_string();
    if matches!(field.vis, Visibility::Inherited) {
        return Err(syn::Error::new_spanned(
            &ident,
            format!("private field not allowed ({name})"),
        ));
    }
    if let Some(kind) = unsupported_type(&field.ty) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            format!("type `{kind}` not allowed ({name})"),
        ));
    }
    Ok(FieldSpec {
        ident,
        name,
        tag: parse_field_tag(field)?,
    })
}

/// Gathers and validates the user-provided struct.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<OptionsInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(parse_field)
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Options requires named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Options can only be derived for structs",
            ));
        }
    };
    Ok(OptionsInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
