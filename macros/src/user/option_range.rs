//! `#[derive(OptionRange)]`
//!
//! For a fieldless enum, generates the `OptionRange` impl together with
//! `const fn index`, `const fn is`, `FromStr` and `Display`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr};

/// Contents of `#[option(..)]`.
#[derive(Default)]
struct OptionArgs {
    name: Option<LitStr>,
    min: Option<Ident>,
    max: Option<Ident>,
}

/// `name = ".."` everywhere; `min = Variant` / `max = Variant` on the enum.
fn option_args(attrs: &[Attribute], on_enum: bool) -> syn::Result<OptionArgs> {
    let mut args = OptionArgs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("option")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                args.name = Some(meta.value()?.parse()?);
            } else if on_enum && meta.path.is_ident("min") {
                args.min = Some(meta.value()?.parse()?);
            } else if on_enum && meta.path.is_ident("max") {
                args.max = Some(meta.value()?.parse()?);
            } else if on_enum {
                return Err(meta.error("expected `name = \"..\"`, `min = Variant` or `max = Variant`"));
            } else {
                return Err(meta.error("expected `name = \"..\"`"));
            }
            Ok(())
        })?;
    }
    Ok(args)
}

/// Position of the variant named by a `min`/`max` bound.
fn bound_index(bound: &Ident, variants: &[&Ident]) -> syn::Result<usize> {
    variants
        .iter()
        .position(|v| *v == bound)
        .ok_or_else(|| syn::Error::new_spanned(bound, format!("no variant named `{bound}`")))
}

pub fn expand_derive_option_range(input: DeriveInput) -> TokenStream2 {
    match derive_option_range(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_option_range(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "OptionRange can only be derived for enums"));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "OptionRange cannot be derived for generic enums",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "an option range needs at least one value"));
    }

    let mut variants = Vec::new();
    let mut names = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "option values cannot carry fields",
            ));
        }
        let display = option_args(&variant.attrs, false)?
            .name
            .unwrap_or_else(|| LitStr::new(&variant.ident.to_string(), variant.ident.span()));
        variants.push(&variant.ident);
        names.push(display);
    }

    let args = option_args(&input.attrs, true)?;
    let option = args
        .name
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));

    let min = args.min.as_ref().map(|b| bound_index(b, &variants)).transpose()?;
    let max = args.max.as_ref().map(|b| bound_index(b, &variants)).transpose()?;
    if let (Some(lo), Some(hi), Some(bound)) = (min, max, args.max.as_ref()) {
        if lo > hi {
            return Err(syn::Error::new_spanned(bound, "`max` comes before `min`"));
        }
    }
    let min_const = min.map(|i| quote! { const MIN_INDEX: usize = #i; });
    let max_const = max.map(|i| quote! { const MAX_INDEX: usize = #i; });

    let indices = 0..variants.len();

    Ok(quote! {
        impl #name {
            /// Position of this value in declaration order.
            #[inline]
            pub const fn index(self) -> usize {
                match self {
                    #(Self::#variants => #indices,)*
                }
            }

            /// `self == other`, usable in constant predicates.
            #[inline]
            pub const fn is(self, other: Self) -> bool {
                self.index() == other.index()
            }
        }

        impl ::cond_params::option::OptionRange for #name {
            const OPTION: &'static str = #option;
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];
            const NAMES: &'static [&'static str] = &[#(#names),*];
            #min_const
            #max_const

            #[inline]
            fn index(self) -> usize {
                #name::index(self)
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::cond_params::option::OptionError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::cond_params::option::OptionRange>::parse_option(s)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::cond_params::option::OptionRange>::name(*self))
            }
        }
    })
}
