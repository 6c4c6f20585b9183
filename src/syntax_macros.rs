//! Selection shorthand macros.

// =============================================================================
// cond_struct! - Conditional component in type position
// =============================================================================

/// Select a component by a constant condition.
///
/// `cond_struct!(cond, Component<Aux, ..>)` is `CondStruct<{ cond }, Component<Aux, ..>>`:
/// the component when `cond` is true, its `EmptyStruct` otherwise. Everything
/// after the first comma names the component, auxiliary type arguments
/// included.
///
/// # Example
///
/// ```
/// use cond_params::{cond_struct, Component, EmptyStruct};
///
/// #[derive(Component)]
/// struct Planes<T, const N: usize> { normals: [T; N] }
///
/// const USE_PLANES: bool = true;
/// const USE_DEM: bool = false;
///
/// let planes: cond_struct!(USE_PLANES, Planes<f32, 2>) = Planes { normals: [0.0, 1.0] };
/// let dem: cond_struct!(USE_DEM && USE_PLANES, Planes<f32, 2>) = EmptyStruct::new();
/// assert_eq!(planes.normals[1], 1.0);
/// assert_eq!(core::mem::size_of_val(&dem), 0);
/// ```
#[macro_export]
macro_rules! cond_struct {
    ($cond:expr, $($component:tt)+) => {
        $crate::CondStruct<{ $cond }, $($component)+>
    };
}
