//! # Axis Detection
//!
//! Static answer to "does this slot carry its component?".
//!
//! Every `#[derive(Component)]` struct is an enabled axis of itself, and
//! every `EmptyStruct<T>` is the disabled axis of `T`. Because both sides of
//! a `Select` implement [`Axis`], a concrete selected type can be inspected
//! without naming the predicate that produced it:
//!
//! ```
//! use cond_params::{is_enabled, Component, CondStruct};
//!
//! #[derive(Component)]
//! struct WaterDepth { max_depth: f32 }
//!
//! const SA_BOUNDARY: bool = false;
//!
//! assert!(!is_enabled::<CondStruct<SA_BOUNDARY, WaterDepth>>());
//! assert!(is_enabled::<CondStruct<{ !SA_BOUNDARY }, WaterDepth>>());
//! ```

use crate::empty::EmptyStruct;
use crate::primitives::{Absent, Bool};

/// One side of a selection: the component or its placeholder.
pub trait Axis {
    /// The component this slot stands for.
    type Component;

    /// Whether the slot carries the component's storage.
    type Enabled: Bool;

    const ENABLED: bool = <Self::Enabled as Bool>::VALUE;

    /// Names of the members reachable through this slot.
    const FIELDS: &'static [&'static str];
}

impl<T> Axis for EmptyStruct<T> {
    type Component = T;
    type Enabled = Absent;
    const FIELDS: &'static [&'static str] = &[];
}

/// `true` when `A` is a real component rather than a placeholder.
pub const fn is_enabled<A: Axis>() -> bool {
    A::ENABLED
}

/// Whether the slot `A` exposes a member called `field`.
///
/// Usable in constant predicates: `Truth<{ has_field::<A>("gam_n") }>`.
pub const fn has_field<A: Axis>(field: &str) -> bool {
    let mut i = 0;
    while i < A::FIELDS.len() {
        if str_eq(A::FIELDS[i], field) {
            return true;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Present;
    use crate::select::Select;

    struct Keps {
        _k: f32,
        _e: f32,
    }

    impl Axis for Keps {
        type Component = Self;
        type Enabled = Present;
        const FIELDS: &'static [&'static str] = &["k", "e"];
    }

    #[test]
    fn test_detects_both_branches() {
        assert!(is_enabled::<Select<Present, Keps>>());
        assert!(!is_enabled::<Select<Absent, Keps>>());
    }

    #[test]
    fn test_fields_only_on_enabled() {
        assert!(has_field::<Keps>("k"));
        assert!(!has_field::<Keps>("turbvisc"));
        assert!(!has_field::<EmptyStruct<Keps>>("k"));
        assert!(<EmptyStruct<Keps> as Axis>::FIELDS.is_empty());
    }

    #[test]
    fn test_field_check_in_const_context() {
        const HAS_K: bool = has_field::<Keps>("k");
        const HAS_KK: bool = has_field::<Keps>("kk");
        const OFF_HAS_K: bool = has_field::<EmptyStruct<Keps>>("k");
        assert!(HAS_K);
        assert!(!HAS_KK);
        assert!(!OFF_HAS_K);

        type Picked = crate::select::CondStruct<{ has_field::<Keps>("e") }, Keps>;
        assert!(is_enabled::<Picked>());
    }
}
