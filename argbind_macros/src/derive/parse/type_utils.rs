//! Type introspection helpers.
//!
//! Shallow inspection of `syn::Type` values to reject types that can never
//! hold a single command-line value: wrappers such as `Option<T>`,
//! collections such as `Vec<T>` and `BTreeMap<K, V>`, and compound or
//! borrowed types.

use syn::Type;

/// Final path segments that name a wrapper or collection.
const REJECTED_PATHS: [&str; 8] = [
    "Option", "Vec", "VecDeque", "HashMap", "BTreeMap", "HashSet", "BTreeSet", "Box",
];

/// Returns the last path segment of `ty`, if it is a path type.
///
/// The check is shallow: `std::vec::Vec<T>` and `Vec<T>` both yield `Vec`.
fn last_segment(ty: &Type) -> Option<&syn::Ident> {
    let Type::Path(p) = ty else {
        return None;
    };
    p.path.segments.last().map(|segment| &segment.ident)
}

/// Names the offending shape when `ty` cannot be decoded from one token.
///
/// Returns `None` for plain paths, which are left to the `Scalar` bound.
pub(crate) fn unsupported_type(ty: &Type) -> Option<String> {
    match ty {
        Type::Array(_) => Some("array".to_owned()),
        Type::Slice(_) => Some("slice".to_owned()),
        Type::Tuple(_) => Some("tuple".to_owned()),
        Type::Reference(_) => Some("reference".to_owned()),
        Type::Ptr(_) => Some("pointer".to_owned()),
        Type::Paren(inner) => unsupported_type(&inner.elem),
        Type::Group(inner) => unsupported_type(&inner.elem),
        _ => last_segment(ty)
            .map(ToString::to_string)
            .filter(|segment| REJECTED_PATHS.contains(&segment.as_str())),
    }
}
