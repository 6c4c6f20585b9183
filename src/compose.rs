//! # Composed Structures
//!
//! A composed structure is a struct with one named field per axis, each
//! typed by a selection:
//!
//! ```
//! use cond_params::prelude::*;
//!
//! #[derive(Component, Debug, Clone, Copy, PartialEq)]
//! struct Positions { x: i32, y: i32 }
//!
//! #[derive(Component, Debug, Clone, Copy, PartialEq)]
//! struct Weights { z: f32 }
//!
//! #[derive(Composed)]
//! #[composed(Debug, Clone, Copy)]
//! struct Params<const A: bool, const B: bool>
//! where
//!     (): SelectBool<A> + SelectBool<B>,
//! {
//!     pos: CondStruct<A, Positions>,
//!     weights: CondStruct<B, Weights>,
//! }
//!
//! let p = Params::<true, false>::construct(((1i32, 2i32), (0.5f32,)));
//! assert_eq!(p.pos.x + p.pos.y, 3);
//! assert_eq!(core::mem::size_of_val(&p), core::mem::size_of::<Positions>());
//! assert_eq!(Params::<true, false>::enabled_axes().count(), 1);
//! ```
//!
//! Each axis keeps its members under its own field name, so two components
//! may declare members with the same name without clashing. A disabled
//! axis has no members at all:
//!
//! ```compile_fail
//! use cond_params::prelude::*;
//!
//! #[derive(Component)]
//! struct Weights { z: f32 }
//!
//! #[derive(Composed)]
//! struct Params {
//!     weights: CondStruct<false, Weights>,
//! }
//!
//! let p = Params::construct(((0.5,),));
//! let _ = p.weights.z;
//! ```
//!
//! A component backs at most one axis:
//!
//! ```compile_fail
//! use cond_params::prelude::*;
//!
//! #[derive(Component)]
//! struct Weights { z: f32 }
//!
//! #[derive(Composed)]
//! struct Params {
//!     near: CondStruct<true, Weights>,
//!     far: CondStruct<false, Weights>,
//! }
//! ```

/// Build-time description of one axis of a composed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisLayout {
    /// Field holding the axis.
    pub field: &'static str,
    /// Component type, as written in the struct definition.
    pub component: &'static str,
    /// Whether the predicate selected the component.
    pub enabled: bool,
    /// Storage of the selected type, in bytes.
    pub size: usize,
}

/// Implemented by `#[derive(Composed)]`.
pub trait Composed: Sized {
    /// Name of the composed struct.
    const NAME: &'static str;

    /// Every axis, in field order. Plain (unconditional) fields are not listed.
    const AXES: &'static [AxisLayout];

    /// Size of one instance of this specialization.
    const SIZE: usize = core::mem::size_of::<Self>();

    /// Look up an axis by field name.
    fn axis(field: &str) -> Option<&'static AxisLayout> {
        Self::AXES.iter().find(|axis| axis.field == field)
    }

    fn enabled_axes() -> impl Iterator<Item = &'static AxisLayout> {
        Self::AXES.iter().filter(|axis| axis.enabled)
    }

    fn disabled_axes() -> impl Iterator<Item = &'static AxisLayout> {
        Self::AXES.iter().filter(|axis| !axis.enabled)
    }

    /// Bytes contributed by enabled axes.
    fn axis_storage() -> usize {
        Self::enabled_axes().map(|axis| axis.size).sum()
    }
}

/// Emit the layout of `C` as `tracing` events.
///
/// One `debug` event per axis, then an `info` summary. Hosts call this when
/// they pick the specialization they are about to launch.
#[cfg(feature = "tracing")]
pub fn log_layout<C: Composed>() {
    for axis in C::AXES {
        tracing::debug!(
            target: "cond_params::layout",
            composed = C::NAME,
            field = axis.field,
            component = axis.component,
            enabled = axis.enabled,
            size = axis.size,
            "axis"
        );
    }
    tracing::info!(
        target: "cond_params::layout",
        composed = C::NAME,
        size = C::SIZE,
        enabled = C::enabled_axes().count(),
        disabled = C::disabled_axes().count(),
        "specialization selected"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[derive(Component, Debug, Clone, Copy, PartialEq)]
    struct SaBoundary {
        gam_n: [f32; 4],
    }

    #[derive(Component, Debug, Clone, Copy, PartialEq)]
    struct Dem {
        dem_size: u32,
    }

    #[derive(Composed)]
    #[composed(Debug, Clone, Copy, PartialEq)]
    struct Forces<Sa: Bool, UseDem: Bool> {
        sa: Select<Sa, SaBoundary>,
        dem: Select<UseDem, Dem>,
    }

    type SaOnly = Forces<Present, Absent>;

    #[test]
    fn test_layout_describes_selection() {
        assert_eq!(SaOnly::NAME, "Forces");
        assert_eq!(SaOnly::AXES.len(), 2);

        let sa = SaOnly::axis("sa");
        assert_eq!(sa.map(|a| a.enabled), Some(true));
        assert_eq!(sa.map(|a| a.size), Some(16));

        let dem = SaOnly::axis("dem");
        assert_eq!(dem.map(|a| (a.component, a.enabled, a.size)), Some(("Dem", false, 0)));
        assert!(SaOnly::axis("keps").is_none());
    }

    #[test]
    fn test_storage_matches_enabled_axes() {
        assert_eq!(SaOnly::axis_storage(), SaOnly::SIZE);
        assert_eq!(Forces::<Absent, Absent>::SIZE, 0);
        assert_eq!(Forces::<Present, Present>::disabled_axes().count(), 0);
    }

    #[test]
    fn test_construct_discards_disabled_arguments() {
        let f = SaOnly::construct((([1.0, 0.0, 0.0, 0.5],), (64,)));
        assert_eq!(f.sa.gam_n[3], 0.5);
        assert_eq!(f, f.clone());
    }
}
