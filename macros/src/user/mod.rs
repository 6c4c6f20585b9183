//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Component)]` | on struct | Mark a member group usable as an axis |
//! | `#[derive(Composed)]` | on struct | Assemble axes into a parameter struct |
//! | `#[derive(OptionRange)]` | on enum | Closed set of named option values |
//! | `pred!` | function macro | Combine predicates into one `Bool` type |

mod component;
mod composed;
mod option_range;
mod predicate;

pub use component::expand_derive_component;
pub use composed::expand_derive_composed;
pub use option_range::expand_derive_option_range;
pub use predicate::expand_pred;
