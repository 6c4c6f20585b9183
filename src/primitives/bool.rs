//! Predicates as types.
//!
//! `Present` and `Absent` are the two values; [`Bool`] is their common trait.
//!
//! A predicate is either one of these two types, a combination of them
//! (`And`, `Or`, `Not`), or a `const bool` lifted with [`Truth`].

use crate::empty::{Construct, EmptyStruct};

/// A predicate value known at build time.
pub trait Bool: 'static {
    const VALUE: bool;

    /// `Then` when true, `Else` when false.
    type If<Then, Else>;

    /// Same choice restricted to predicates, so the result is again a `Bool`.
    type Elif<Then: Bool, Else: Bool>: Bool;

    type And<Other: Bool>: Bool;
    type Or<Other: Bool>: Bool;
    type Not: Bool;

    /// Build the type selected for component `T` from `T`'s argument list.
    ///
    /// `Present` forwards `args` to `T`; `Absent` drops them and returns the
    /// empty substitute. Either way the result is the field type an axis
    /// declared as `Select<Self, T>`, so generic code can fill it without
    /// knowing which branch it is in.
    fn construct<T, Args>(args: Args) -> Self::If<T, EmptyStruct<T>>
    where
        T: Construct<Args>;

    /// Branch on a selected slot: `then` sees the component when it is
    /// there, `otherwise` runs when it is not. Resolved per type, so the
    /// untaken branch is never compiled into the kernel.
    fn when<T, R, F, G>(slot: &Self::If<T, EmptyStruct<T>>, then: F, otherwise: G) -> R
    where
        F: FnOnce(&T) -> R,
        G: FnOnce() -> R;
}

/// The predicate holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Present;

/// The predicate does not hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;

    #[inline(always)]
    fn construct<T, Args>(args: Args) -> Self::If<T, EmptyStruct<T>>
    where
        T: Construct<Args>,
    {
        T::construct(args)
    }

    #[inline(always)]
    fn when<T, R, F, G>(slot: &Self::If<T, EmptyStruct<T>>, then: F, _otherwise: G) -> R
    where
        F: FnOnce(&T) -> R,
        G: FnOnce() -> R,
    {
        then(slot)
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;

    #[inline(always)]
    fn construct<T, Args>(_args: Args) -> Self::If<T, EmptyStruct<T>>
    where
        T: Construct<Args>,
    {
        EmptyStruct::new()
    }

    #[inline(always)]
    fn when<T, R, F, G>(_slot: &Self::If<T, EmptyStruct<T>>, _then: F, otherwise: G) -> R
    where
        F: FnOnce(&T) -> R,
        G: FnOnce() -> R,
    {
        otherwise()
    }
}

/// Both predicates hold.
pub type And<L, R> = <L as Bool>::And<R>;

/// Either predicate holds.
pub type Or<L, R> = <L as Bool>::Or<R>;

/// Negation.
pub type Not<B> = <B as Bool>::Not;

/// Maps a `const bool` to its predicate type through `Out`.
///
/// Generic code over `const B: bool` needs `(): SelectBool<B>` in scope to
/// name [`Truth<B>`].
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// The type-level boolean for a constant.
///
/// The argument must be a constant expression; `Truth<{ flag }>` with a
/// runtime `flag` does not build.
pub type Truth<const B: bool> = <() as SelectBool<B>>::Out;

/// `T` if `C`, `E` otherwise.
pub type If<const C: bool, T, E> = <Truth<C> as Bool>::If<T, E>;

/// `If` over predicates.
pub type Elif<const C: bool, T, E> = <Truth<C> as Bool>::Elif<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn value<B: Bool>() -> bool {
        B::VALUE
    }

    #[test]
    fn test_truth_table() {
        assert!(value::<And<Present, Present>>());
        assert!(!value::<And<Present, Absent>>());
        assert!(!value::<And<Absent, Present>>());
        assert!(value::<Or<Absent, Present>>());
        assert!(!value::<Or<Absent, Absent>>());
        assert!(value::<Not<Absent>>());
        assert!(!value::<Not<Present>>());
    }

    #[test]
    fn test_const_lifting() {
        const SA: bool = 3 > 2;
        assert!(value::<Truth<SA>>());
        assert!(!value::<Truth<{ !SA }>>());
        assert!(value::<Elif<false, Absent, Present>>());
    }

    #[test]
    fn test_if_selects_type() {
        let picked: If<true, u16, u64> = 7u16;
        let other: If<false, u16, u64> = 7u64;
        assert_eq!(core::mem::size_of_val(&picked), 2);
        assert_eq!(core::mem::size_of_val(&other), 8);
    }
}
