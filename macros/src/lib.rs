//! Procedural macros for cond-params
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Component)]` | struct | Axis metadata and tuple constructor |
//! | `#[derive(Composed)]` | struct | Per-field constructor, layout, conditional derives |
//! | `#[derive(OptionRange)]` | enum | Option names, parsing, `const fn is` |
//! | `pred!` | - | Type-level `&`, `|`, `!` over predicates |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Component)]
//! struct SaParams { gam_n: f32 }
//!
//! #[derive(Composed)]
//! #[composed(Clone, Copy)]
//! struct ForcesParams<S: Spec> {
//!     sa: Select<S::SaBoundary, SaParams>,
//!     dem: Select<pred!(S::Dem & !S::SaBoundary), DemParams>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro for an axis component.
///
/// Implements `Axis` (enabled, listing the member names) and, unless
/// `#[component(manual)]` is given, `Construct<(F0, .., Fn)>` taking the
/// fields in declaration order.
///
/// # Usage
/// ```ignore
/// #[derive(Component)]
/// struct Keps { k_max: f32, e_max: f32 }
///
/// let on: Select<Present, Keps> = Present::construct::<Keps, _>((1.0, 2.0));
/// let off: Select<Absent, Keps> = Absent::construct::<Keps, _>((1.0, 2.0));
/// ```
#[proc_macro_derive(Component, attributes(component))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_component(input).into()
}

/// Derive macro for a composed parameter struct.
///
/// Fields typed `Select<P, T>`, `CondStruct<C, T>` or `cond_struct!(c, T)`
/// are axes; every other field is always present. Generates:
/// - `Construct<(A0, .., An)>`, one argument per field in order. A disabled
///   axis drops its argument.
/// - `Composed` (name and per-axis layout).
/// - each trait listed in `#[composed(..)]`, bounded on every field type so
///   that it holds for every selection.
///
/// A component backing two axes is rejected.
///
/// # Usage
/// ```ignore
/// #[derive(Composed)]
/// #[composed(Clone, Copy, Debug, PartialEq)]
/// struct ForcesParams<S: Spec> {
///     common: CommonParams,
///     sa: Select<S::SaBoundary, SaParams>,
///     keps: Select<S::KEpsilon, KepsParams>,
/// }
/// ```
#[proc_macro_derive(Composed, attributes(composed))]
pub fn derive_composed(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_composed(input).into()
}

/// Derive macro for a closed option enumeration.
///
/// Names default to the variant identifiers; override with
/// `#[option(name = "..")]` on a variant, or on the enum for the option name.
/// `#[option(min = Variant, max = Variant)]` on the enum narrows the valid
/// range; values outside it are never parsed or listed.
///
/// # Usage
/// ```ignore
/// #[derive(OptionRange, Clone, Copy)]
/// enum ViscousModel {
///     #[option(name = "Morris 1997")]
///     Morris,
///     #[option(name = "Español & Revenga")]
///     Espanol,
/// }
///
/// const VISC: ViscousModel = ViscousModel::Morris;
/// type Slot = cond_struct!(VISC.is(ViscousModel::Morris), MorrisParams);
/// ```
#[proc_macro_derive(OptionRange, attributes(option))]
pub fn derive_option_range(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_option_range(input).into()
}

/// Combine predicates into a single `Bool` type.
///
/// Operands are `Bool` types, `true`/`false`, or `{ const expr }` blocks.
/// `!` binds tightest, then `&`, then `|`; `&&` and `||` are read as `&`
/// and `|`.
///
/// # Usage
/// ```ignore
/// struct Params<S: Spec> {
///     planes: Select<pred!(S::Planes & !S::SaBoundary), PlanesParams>,
///     dem: Select<pred!(S::Dem | { FORCE_DEM }), DemParams>,
/// }
/// ```
#[proc_macro]
pub fn pred(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as common::BoolExpr);
    user::expand_pred(expr).into()
}
