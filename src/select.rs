//! # Selector
//!
//! Picks, per axis, between a component and its empty substitute.
//!
//! ```text
//! Select<P, T>          P: Bool         (type-level predicate, works in generic code)
//! CondStruct<C, T>      C: const bool   (constant predicate, concrete code)
//! cond_struct!(c, T)    shorthand for CondStruct<{ c }, T>
//! ```
//!
//! All three resolve to `T` itself or to `EmptyStruct<T>`; there is no
//! wrapper around the selected type.
//!
//! A predicate that is not a constant does not build:
//!
//! ```compile_fail
//! use cond_params::{cond_struct, Component};
//!
//! #[derive(Component)]
//! struct Depth { max: f32 }
//!
//! fn pick(enabled: bool) {
//!     let _slot: cond_struct!(enabled, Depth) = Default::default();
//! }
//! ```

use crate::empty::EmptyStruct;
use crate::primitives::{Bool, Truth};

/// `T` if `P` holds, `EmptyStruct<T>` otherwise.
pub type Select<P, T> = <P as Bool>::If<T, EmptyStruct<T>>;

/// `T` if the constant `C` is true, `EmptyStruct<T>` otherwise.
pub type CondStruct<const C: bool, T> = Select<Truth<C>, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::empty::Construct;
    use crate::primitives::{Absent, And, Not, Present};
    use core::any::TypeId;

    #[derive(Debug, PartialEq)]
    struct Viscosity {
        nu: f32,
    }

    impl Construct<(f32,)> for Viscosity {
        fn construct((nu,): (f32,)) -> Self {
            Viscosity { nu }
        }
    }

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_select_resolves_to_component_or_substitute() {
        assert!(same::<Select<Present, Viscosity>, Viscosity>());
        assert!(same::<Select<Absent, Viscosity>, EmptyStruct<Viscosity>>());
        assert!(same::<CondStruct<true, Viscosity>, Viscosity>());
        assert!(same::<CondStruct<{ 1 + 1 == 3 }, Viscosity>, EmptyStruct<Viscosity>>());
        assert!(same::<Select<And<Present, Not<Absent>>, Viscosity>, Viscosity>());
    }

    #[test]
    fn test_construct_through_predicate() {
        let on: Select<Present, Viscosity> = Present::construct::<Viscosity, _>((0.25f32,));
        assert_eq!(on, Viscosity { nu: 0.25 });

        let off: Select<Absent, Viscosity> = Absent::construct::<Viscosity, _>((0.25f32,));
        assert_eq!(core::mem::size_of_val(&off), 0);
    }

    #[test]
    fn test_when_dispatches_per_type() {
        fn nu<P: Bool>(slot: &Select<P, Viscosity>) -> f32 {
            P::when::<Viscosity, _, _, _>(slot, |v| v.nu, || 0.0)
        }

        assert_eq!(nu::<Present>(&Viscosity { nu: 1.5 }), 1.5);
        assert_eq!(nu::<Absent>(&EmptyStruct::new()), 0.0);
    }
}
