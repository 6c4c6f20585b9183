//! Common parsing utilities
//!
//! Shared helpers for the derive macros: field extraction, type keys and
//! where-clause assembly.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Fields, Generics, Type};

// =============================================================================
// Field Extraction
// =============================================================================

/// The fields of a struct, or an error naming the derive that needs one.
pub fn struct_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive} can only be derived for structs"),
        )),
    }
}

/// Member name as written in field access: `name` for named fields, the
/// position for tuple fields.
pub fn member_name(field: &syn::Field, index: usize) -> String {
    match &field.ident {
        Some(ident) => ident.to_string(),
        None => index.to_string(),
    }
}

// =============================================================================
// Types
// =============================================================================

/// Canonical string for a type, used for display and duplicate detection.
pub fn type_key(ty: &impl ToTokens) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

// =============================================================================
// Where Clauses
// =============================================================================

/// The struct's own where-predicates followed by `extra`.
pub fn where_with<I>(generics: &Generics, extra: I) -> TokenStream2
where
    I: IntoIterator<Item = TokenStream2>,
{
    let existing: Vec<_> = generics
        .where_clause
        .iter()
        .flat_map(|clause| clause.predicates.iter())
        .collect();
    let extra: Vec<_> = extra.into_iter().collect();

    if existing.is_empty() && extra.is_empty() {
        quote! {}
    } else {
        quote! { where #(#existing,)* #(#extra,)* }
    }
}

/// `Ty: Bound` for every type in `tys`.
pub fn bound_each<'a>(tys: impl IntoIterator<Item = &'a Type>, bound: &TokenStream2) -> Vec<TokenStream2> {
    tys.into_iter().map(|ty| quote! { #ty: #bound }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_strips_spaces() {
        let ty: Type = syn::parse_quote!(Planes<f32, 2>);
        assert_eq!(type_key(&ty), "Planes<f32,2>");
    }

    #[test]
    fn test_where_with_merges() {
        let generics: Generics = syn::parse_quote!(<S>);
        assert!(where_with(&generics, Vec::new()).is_empty());

        let input: DeriveInput = syn::parse_quote! {
            struct P<S> where S: Spec { a: u8 }
        };
        let out = where_with(&input.generics, vec![quote!(u8: Clone)]).to_string();
        assert_eq!(out.replace(' ', ""), "whereS:Spec,u8:Clone,");
    }
}
