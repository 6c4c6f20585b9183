#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: option parsing (errors keep the rejected input)
// - tracing: layout logging for composed structs

//! # cond-params
//!
//! Compile-time conditional composition of parameter structs.
//!
//! Performance-critical kernels take one parameter bundle per specialization.
//! Which member groups a bundle needs depends on build-time choices (boundary
//! model, viscosity model, enabled features...). Writing one struct per
//! combination does not scale; `cond-params` writes it once:
//!
//! ```text
//! struct ForcesParams<S: Spec> {
//!     common: CommonParams,                    always present
//!     sa:     Select<S::SaBoundary, SaParams>, SaParams | EmptyStruct<SaParams>
//!     keps:   Select<S::KEpsilon, KepsParams>, KepsParams | EmptyStruct<KepsParams>
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present / Absent), And / Or / Not, Truth<const B>        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Selection                                               |
//! |  - EmptyStruct<T>, Construct<Args>                                |
//! |  - Select<P, T>, CondStruct<C, T>, cond_struct!                   |
//! |  - Axis detection                                                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - #[derive(Component)], #[derive(Composed)], pred!               |
//! |  - #[derive(OptionRange)] for the options predicates come from    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - **Zero cost**: a disabled axis is a zero-sized `EmptyStruct<T>`.
//! - **Absence, not default**: a disabled axis has no members; touching one
//!   is a build error.
//! - **Uniform construction**: `EmptyStruct<T>` accepts every argument list
//!   `T` accepts, so one constructor serves every specialization.
//! - **No runtime selection**: predicates are types or constants; a runtime
//!   value cannot be used as one.
//!
//! ## Quick Start
//!
//! ```
//! use cond_params::prelude::*;
//!
//! #[derive(Component)]
//! struct SaParams { gam_n: f32 }
//!
//! #[derive(Component)]
//! struct KepsParams { k: f32, e: f32 }
//!
//! trait Spec {
//!     type SaBoundary: Bool;
//!     type KEpsilon: Bool;
//! }
//!
//! #[derive(Composed)]
//! struct ForcesParams<S: Spec> {
//!     sa: Select<S::SaBoundary, SaParams>,
//!     keps: Select<S::KEpsilon, KepsParams>,
//! }
//!
//! struct SaLaminar;
//! impl Spec for SaLaminar {
//!     type SaBoundary = Present;
//!     type KEpsilon = Absent;
//! }
//!
//! // One argument list per axis, whatever the specialization.
//! let params = ForcesParams::<SaLaminar>::construct(((0.5f32,), (1.0f32, 2.0f32)));
//! assert_eq!(params.sa.gam_n, 0.5);
//! assert_eq!(core::mem::size_of_val(&params), 4);
//! ```

// Allow `::cond_params` to work inside the crate itself
extern crate self as cond_params;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Selection
// =============================================================================
pub mod empty;
pub mod select;
pub mod axis;

// =============================================================================
// Layer 2: Composition and Options
// =============================================================================
pub mod compose;

#[cfg(feature = "alloc")]
pub mod option;

// Syntax macros (cond_struct!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, And, Bool, Elif, If, Not, Or, Present, SelectBool, Truth};
pub use empty::{Construct, EmptyStruct};
pub use select::{CondStruct, Select};
pub use axis::{has_field, is_enabled, Axis};
pub use compose::{AxisLayout, Composed};
#[cfg(feature = "alloc")]
pub use option::{OptionError, OptionRange};

// Re-export proc-macros
pub use macros::{pred, Component, Composed};
#[cfg(feature = "alloc")]
pub use macros::OptionRange;

/// Common items for composing parameter structs.
pub mod prelude {
    pub use crate::primitives::bool::{Absent, Bool, Present, SelectBool, Truth};
    pub use crate::empty::{Construct, EmptyStruct};
    pub use crate::select::{CondStruct, Select};
    pub use crate::axis::Axis;
    pub use crate::compose::Composed;
    #[cfg(feature = "alloc")]
    pub use crate::option::OptionRange;
    pub use macros::{pred, Component, Composed};
    #[cfg(feature = "alloc")]
    pub use macros::OptionRange;
    // Note: cond_struct! is #[macro_export] so it's at crate root
}
