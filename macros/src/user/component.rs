//! `#[derive(Component)]`
//!
//! Turns a plain struct into an axis component:
//! - `Axis` (enabled, with the struct's member names),
//! - `Construct<(F0, .., Fn)>` taking the fields in declaration order,
//!   unless `#[component(manual)]` is given.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, Fields};

use crate::common::{member_name, struct_fields, where_with};

struct ComponentArgs {
    manual: bool,
}

fn parse_args(input: &DeriveInput) -> syn::Result<ComponentArgs> {
    let mut args = ComponentArgs { manual: false };
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("component")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("manual") {
                args.manual = true;
                Ok(())
            } else {
                Err(meta.error("expected `manual`"))
            }
        })?;
    }
    Ok(args)
}

pub fn expand_derive_component(input: DeriveInput) -> TokenStream2 {
    match derive_component(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_component(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let args = parse_args(input)?;
    let fields = struct_fields(input, "Component")?;

    let name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = where_with(&input.generics, None);

    let member_names: Vec<_> = fields
        .iter()
        .enumerate()
        .map(|(i, f)| member_name(f, i))
        .collect();

    let axis_impl = quote! {
        impl #impl_generics ::cond_params::Axis for #name #ty_generics #where_clause {
            type Component = Self;
            type Enabled = ::cond_params::Present;
            const FIELDS: &'static [&'static str] = &[#(#member_names),*];
        }
    };

    if args.manual {
        return Ok(axis_impl);
    }

    let tys: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let binds: Vec<_> = (0..fields.len()).map(|i| format_ident!("__field{}", i)).collect();

    let body = match fields {
        Fields::Named(named) => {
            let idents = named.named.iter().map(|f| &f.ident);
            quote! { Self { #(#idents: #binds),* } }
        }
        Fields::Unnamed(_) => quote! { Self(#(#binds),*) },
        Fields::Unit => quote! { Self },
    };

    Ok(quote! {
        #axis_impl

        impl #impl_generics ::cond_params::Construct<(#(#tys,)*)> for #name #ty_generics #where_clause {
            #[inline]
            fn construct((#(#binds,)*): (#(#tys,)*)) -> Self {
                #body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> String {
        let input: DeriveInput = syn::parse_str(src).expect("input should parse");
        expand_derive_component(input).to_string().replace(' ', "")
    }

    #[test]
    fn test_named_fields() {
        let out = expand("struct Keps { k: f32, e: f32 }");
        assert!(out.contains("constFIELDS:&'static[&'staticstr]=&[\"k\",\"e\"];"));
        assert!(out.contains("Construct<(f32,f32,)>forKeps"));
        assert!(out.contains("Self{k:__field0,e:__field1}"));
    }

    #[test]
    fn test_manual_skips_constructor() {
        let out = expand("#[component(manual)] struct Keps { k: f32 }");
        assert!(out.contains("::cond_params::AxisforKeps"));
        assert!(!out.contains("Construct"));
    }

    #[test]
    fn test_rejects_enums() {
        let out = expand("enum E { A }");
        assert!(out.contains("compile_error"));
    }
}
