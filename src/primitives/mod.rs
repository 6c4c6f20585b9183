//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent) and the
//!   const-to-type bridge every predicate goes through.

pub mod bool;

// Re-export key types at this level
pub use bool::{Absent, And, Bool, Elif, If, Not, Or, Present, SelectBool, Truth};
