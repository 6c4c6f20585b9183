//! `#[derive(Composed)]`
//!
//! Assembles a composed structure from its fields:
//!
//! ```ignore
//! #[derive(Composed)]
//! #[composed(Clone, Copy, Debug)]
//! struct ForcesParams<S: Spec> {
//!     common: CommonParams,                       // plain member
//!     sa: Select<S::SaBoundary, SaParams>,        // axis
//!     planes: CondStruct<USE_PLANES, Planes>,     // axis, const predicate
//!     dem: cond_struct!(USE_DEM, DemParams),      // axis, shorthand
//! }
//! ```
//!
//! Generates:
//! - `Construct<(A0, .., An)>`: a plain field takes its value directly, an
//!   axis builds its component from its argument (a disabled axis drops it),
//! - `Composed` with one `AxisLayout` per axis,
//! - the traits listed in `#[composed(..)]`, each bounded on every field type.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens};
use syn::{DeriveInput, Fields, GenericArgument, Ident, PathArguments, Type};

use crate::common::{bound_each, struct_fields, type_key, where_with};

// =============================================================================
// Field Classification
// =============================================================================

/// How a field participates in the composition.
enum FieldKind {
    /// Always present.
    Plain,
    /// Selected by `pred` between `component` and its substitute.
    Axis { pred: TokenStream2, component: Type },
}

struct ComposedField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    kind: FieldKind,
}

/// Recognize the three selection spellings.
fn classify(ty: &Type) -> syn::Result<FieldKind> {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return Ok(FieldKind::Plain);
            };
            let is_select = last.ident == "Select";
            let is_cond = last.ident == "CondStruct";
            if !is_select && !is_cond {
                return Ok(FieldKind::Plain);
            }

            let PathArguments::AngleBracketed(args) = &last.arguments else {
                return Ok(FieldKind::Plain);
            };
            let args: Vec<_> = args.args.iter().collect();
            let [pred, GenericArgument::Type(component)] = args.as_slice() else {
                return Err(syn::Error::new_spanned(
                    ty,
                    format!("`{}` takes a predicate and a component type", last.ident),
                ));
            };

            let pred = match (is_select, pred) {
                (true, GenericArgument::Type(p)) => p.to_token_stream(),
                (false, GenericArgument::Type(c)) => quote! { ::cond_params::Truth<#c> },
                (false, GenericArgument::Const(c)) => quote! { ::cond_params::Truth<#c> },
                _ => {
                    return Err(syn::Error::new_spanned(
                        pred,
                        "expected a predicate type or constant",
                    ));
                }
            };
            Ok(FieldKind::Axis { pred, component: component.clone() })
        }
        Type::Macro(mac) if mac.mac.path.is_ident("cond_struct")
            || mac.mac.path.segments.last().is_some_and(|s| s.ident == "cond_struct") =>
        {
            let (cond, component) = mac.mac.parse_body_with(parse_cond_struct_body)?;
            Ok(FieldKind::Axis {
                pred: quote! { ::cond_params::Truth<{ #cond }> },
                component,
            })
        }
        _ => Ok(FieldKind::Plain),
    }
}

fn parse_cond_struct_body(input: syn::parse::ParseStream) -> syn::Result<(syn::Expr, Type)> {
    let cond: syn::Expr = input.parse()?;
    input.parse::<syn::Token![,]>()?;
    let component: Type = input.parse()?;
    Ok((cond, component))
}

/// Key under which a component is compared: the last path segment with its
/// arguments, so `Weights` and `crate::params::Weights` meet.
///
/// The check is syntactic. Two different types sharing a final name and
/// arguments are reported too, and a type alias hides its target.
fn component_key(ty: &Type) -> String {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map(type_key)
            .unwrap_or_else(|| type_key(ty)),
        _ => type_key(ty),
    }
}

/// A component selected by two axes would contribute its member group twice.
///
/// Rejected even when the two predicates exclude each other: a component
/// backs at most one axis.
fn check_duplicate_components(fields: &[ComposedField]) -> syn::Result<()> {
    use std::collections::HashMap;

    let mut seen: HashMap<String, &Ident> = HashMap::new();
    for field in fields {
        if let FieldKind::Axis { component, .. } = &field.kind {
            let key = component_key(component);
            if let Some(first) = seen.insert(key.clone(), field.ident) {
                return Err(syn::Error::new_spanned(
                    field.ty,
                    format!(
                        "component `{}` is selected by both `{}` and `{}`\n\
                         \n\
                         Each component may back at most one axis of a composed struct.",
                        key, first, field.ident
                    ),
                ));
            }
        }
    }
    Ok(())
}

// =============================================================================
// Requested Trait Impls
// =============================================================================

#[derive(Default)]
struct Derives {
    clone: bool,
    copy: bool,
    debug: bool,
    default: bool,
    partial_eq: bool,
    eq: bool,
    hash: bool,
}

fn parse_derives(input: &DeriveInput) -> syn::Result<Derives> {
    let mut derives = Derives::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("composed")) {
        attr.parse_nested_meta(|meta| {
            let flag = match meta.path.get_ident().map(Ident::to_string).as_deref() {
                Some("Clone") => &mut derives.clone,
                Some("Copy") => &mut derives.copy,
                Some("Debug") => &mut derives.debug,
                Some("Default") => &mut derives.default,
                Some("PartialEq") => &mut derives.partial_eq,
                Some("Eq") => &mut derives.eq,
                Some("Hash") => &mut derives.hash,
                _ => {
                    return Err(meta.error(
                        "expected one of `Clone`, `Copy`, `Debug`, `Default`, `PartialEq`, `Eq`, `Hash`",
                    ));
                }
            };
            *flag = true;
            Ok(())
        })?;
    }
    // Copy needs Clone.
    derives.clone |= derives.copy;
    derives.partial_eq |= derives.eq;
    Ok(derives)
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_derive_composed(input: DeriveInput) -> TokenStream2 {
    match derive_composed(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_composed(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Fields::Named(named) = struct_fields(input, "Composed")? else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Composed needs named fields: each axis is reached through its field name",
        ));
    };

    let fields = named
        .named
        .iter()
        .filter_map(|f| f.ident.as_ref().map(|ident| (ident, f)))
        .map(|(ident, f)| {
            Ok(ComposedField {
                ident,
                ty: &f.ty,
                kind: classify(&f.ty)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    check_duplicate_components(&fields)?;
    let derives = parse_derives(input)?;

    let mut out = expand_construct(input, &fields);
    out.extend(expand_composed_trait(input, &fields));
    out.extend(expand_derives(input, &fields, &derives));
    Ok(out)
}

fn expand_construct(input: &DeriveInput, fields: &[ComposedField]) -> TokenStream2 {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let binds: Vec<_> = (0..fields.len()).map(|i| format_ident!("__arg{}", i)).collect();

    // Plain fields take their value as is; each axis gets its own argument type.
    let mut generics = input.generics.clone();
    let mut arg_tys = Vec::new();
    let mut bounds = Vec::new();
    let mut inits = Vec::new();
    for (i, (field, bind)) in fields.iter().zip(&binds).enumerate() {
        let ident = field.ident;
        match &field.kind {
            FieldKind::Plain => {
                arg_tys.push(field.ty.to_token_stream());
                inits.push(quote! { #ident: #bind });
            }
            FieldKind::Axis { pred, component } => {
                let arg = format_ident!("__Arg{}", i);
                generics.params.push(syn::parse_quote!(#arg));
                bounds.push(quote! { #component: ::cond_params::Construct<#arg> });
                inits.push(quote! {
                    #ident: <#pred as ::cond_params::Bool>::construct::<#component, #arg>(#bind)
                });
                arg_tys.push(arg.to_token_stream());
            }
        }
    }
    let (impl_generics, _, _) = generics.split_for_impl();
    let where_clause = where_with(&input.generics, bounds);

    quote! {
        impl #impl_generics ::cond_params::Construct<(#(#arg_tys,)*)> for #name #ty_generics #where_clause {
            #[inline]
            fn construct((#(#binds,)*): (#(#arg_tys,)*)) -> Self {
                Self { #(#inits),* }
            }
        }
    }
}

fn expand_composed_trait(input: &DeriveInput, fields: &[ComposedField]) -> TokenStream2 {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = where_with(&input.generics, None);

    let axes = fields.iter().filter_map(|field| {
        let FieldKind::Axis { pred, component } = &field.kind else {
            return None;
        };
        let field_str = field.ident.to_string();
        let component_str = type_key(component);
        let ty = field.ty;
        Some(quote! {
            ::cond_params::AxisLayout {
                field: #field_str,
                component: #component_str,
                enabled: <#pred as ::cond_params::Bool>::VALUE,
                size: ::core::mem::size_of::<#ty>(),
            }
        })
    });

    quote! {
        impl #impl_generics ::cond_params::Composed for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;
            const AXES: &'static [::cond_params::AxisLayout] = &[#(#axes),*];
        }
    }
}

fn expand_derives(input: &DeriveInput, fields: &[ComposedField], derives: &Derives) -> TokenStream2 {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();

    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let id_strs: Vec<_> = idents.iter().map(|i| i.to_string()).collect();
    let tys: Vec<_> = fields.iter().map(|f| f.ty).collect();
    let bounded = |bound: TokenStream2| where_with(&input.generics, bound_each(tys.iter().copied(), &bound));

    let mut out = TokenStream2::new();

    if derives.clone {
        let wc = bounded(quote! { ::core::clone::Clone });
        out.extend(quote! {
            impl #impl_generics ::core::clone::Clone for #name #ty_generics #wc {
                #[inline]
                fn clone(&self) -> Self {
                    Self { #(#idents: ::core::clone::Clone::clone(&self.#idents)),* }
                }
            }
        });
    }

    if derives.copy {
        let wc = bounded(quote! { ::core::marker::Copy });
        out.extend(quote! {
            impl #impl_generics ::core::marker::Copy for #name #ty_generics #wc {}
        });
    }

    if derives.debug {
        let wc = bounded(quote! { ::core::fmt::Debug });
        out.extend(quote! {
            impl #impl_generics ::core::fmt::Debug for #name #ty_generics #wc {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.debug_struct(#name_str)
                        #(.field(#id_strs, &self.#idents))*
                        .finish()
                }
            }
        });
    }

    if derives.default {
        let wc = bounded(quote! { ::core::default::Default });
        out.extend(quote! {
            impl #impl_generics ::core::default::Default for #name #ty_generics #wc {
                #[inline]
                fn default() -> Self {
                    Self { #(#idents: ::core::default::Default::default()),* }
                }
            }
        });
    }

    if derives.partial_eq {
        let wc = bounded(quote! { ::core::cmp::PartialEq });
        out.extend(quote! {
            impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #wc {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    true #(&& self.#idents == other.#idents)*
                }
            }
        });
    }

    if derives.eq {
        let wc = bounded(quote! { ::core::cmp::Eq });
        out.extend(quote! {
            impl #impl_generics ::core::cmp::Eq for #name #ty_generics #wc {}
        });
    }

    if derives.hash {
        let wc = bounded(quote! { ::core::hash::Hash });
        out.extend(quote! {
            impl #impl_generics ::core::hash::Hash for #name #ty_generics #wc {
                fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                    #(::core::hash::Hash::hash(&self.#idents, state);)*
                }
            }
        });
    }

    out
}
