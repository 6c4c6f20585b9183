//! # Empty Substitute
//!
//! [`EmptyStruct<T>`] stands in for a component `T` whose axis is disabled.
//! It is zero-sized, exposes none of `T`'s members, and accepts every
//! argument list `T` accepts so that construction sites stay identical
//! across both branches.
//!
//! ```text
//! Select<Present, SaParams>  ==  SaParams                 (real storage)
//! Select<Absent,  SaParams>  ==  EmptyStruct<SaParams>    (0 bytes)
//! ```
//!
//! Construction goes through one normalized factory signature,
//! [`Construct<Args>`], with `Args` a tuple. A component gains a
//! constructor by implementing `Construct` for one more tuple shape; the
//! substitute mirrors every such impl automatically.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

// =============================================================================
// Construct - Normalized Constructor
// =============================================================================

/// Build `Self` from an argument tuple.
///
/// `#[derive(Component)]` implements this for the tuple of the struct's
/// fields in declaration order. Other shapes are implemented by hand.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from `{Args}`",
    label = "no constructor taking `{Args}`",
    note = "an empty substitute only accepts the argument lists its component accepts"
)]
pub trait Construct<Args>: Sized {
    fn construct(args: Args) -> Self;
}

// =============================================================================
// EmptyStruct
// =============================================================================

/// Zero-sized placeholder for the component `T`.
///
/// Every trait below is implemented without bounds on `T`: the placeholder
/// has no state, so it can be cloned, compared, hashed and printed whatever
/// `T` supports.
///
/// None of `T`'s fields exist on it:
///
/// ```compile_fail
/// use cond_params::{Component, EmptyStruct};
///
/// #[derive(Component)]
/// struct Depth { max: f32 }
///
/// let empty = EmptyStruct::<Depth>::new();
/// let _ = empty.max;
/// ```
pub struct EmptyStruct<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> EmptyStruct<T> {
    /// The no-argument constructor.
    #[inline(always)]
    pub const fn new() -> Self {
        EmptyStruct(PhantomData)
    }
}

/// The mirrored constructor: accepted exactly when `T` accepts `Args`.
///
/// ```compile_fail
/// use cond_params::{Component, Construct, EmptyStruct};
///
/// #[derive(Component)]
/// struct Depth { max: f32 }
///
/// // `Depth` has no constructor taking a `u8`, so neither does its substitute.
/// let _ = EmptyStruct::<Depth>::construct((1u8,));
/// ```
impl<T, Args> Construct<Args> for EmptyStruct<T>
where
    T: Construct<Args>,
{
    #[inline(always)]
    fn construct(_args: Args) -> Self {
        EmptyStruct::new()
    }
}

impl<T: ?Sized> Default for EmptyStruct<T> {
    #[inline(always)]
    fn default() -> Self {
        EmptyStruct::new()
    }
}

impl<T: ?Sized> Clone for EmptyStruct<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EmptyStruct<T> {}

impl<T: ?Sized> fmt::Debug for EmptyStruct<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmptyStruct<{}>", core::any::type_name::<T>())
    }
}

impl<T: ?Sized> PartialEq for EmptyStruct<T> {
    #[inline(always)]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for EmptyStruct<T> {}

impl<T: ?Sized> PartialOrd for EmptyStruct<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for EmptyStruct<T> {
    #[inline(always)]
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

impl<T: ?Sized> Hash for EmptyStruct<T> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
