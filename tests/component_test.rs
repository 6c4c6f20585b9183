//! Component Test
//!
//! `#[derive(Component)]` over the struct shapes a member group can take,
//! and the empty substitute's construction mirror.

use cond_params::prelude::*;
use cond_params::{has_field, is_enabled};

#[derive(Component, Debug, PartialEq)]
struct Depth(f32, u16);

#[derive(Component, Debug, PartialEq)]
struct Marker;

#[derive(Component, Debug, PartialEq)]
struct Planes<T: Copy, const N: usize> {
    normals: [T; N],
}

#[derive(Component, Debug, PartialEq)]
#[component(manual)]
struct Viscosity {
    nu: f32,
    inv_nu: f32,
}

impl Construct<(f32,)> for Viscosity {
    fn construct((nu,): (f32,)) -> Self {
        Viscosity { nu, inv_nu: 1.0 / nu }
    }
}

impl Construct<()> for Viscosity {
    fn construct((): ()) -> Self {
        Viscosity::construct((1.0f32,))
    }
}

#[test]
fn test_tuple_and_unit_shapes() {
    assert_eq!(Depth::construct((1.5f32, 2u16)), Depth(1.5, 2));
    assert_eq!(<Depth as Axis>::FIELDS, &["0", "1"]);

    assert_eq!(Marker::construct(()), Marker);
    assert!(<Marker as Axis>::FIELDS.is_empty());
    assert!(is_enabled::<Marker>());
}

#[test]
fn test_generic_component() {
    type P2 = Planes<f64, 2>;
    let p = P2::construct(([0.0f64, 1.0f64],));
    assert_eq!(p.normals[1], 1.0);
    assert!(has_field::<P2>("normals"));

    let off: Select<Absent, P2> = Absent::construct::<P2, _>(([0.0f64, 1.0f64],));
    assert!(!has_field::<Select<Absent, P2>>("normals"));
    assert_eq!(core::mem::size_of_val(&off), 0);
}

#[test]
fn test_manual_constructors_are_mirrored() {
    let v: Select<Present, Viscosity> = Present::construct::<Viscosity, _>((4.0f32,));
    assert_eq!(v.inv_nu, 0.25);
    assert_eq!(Present::construct::<Viscosity, _>(()).nu, 1.0);

    // Both shapes the component accepts are accepted by its substitute.
    let _: EmptyStruct<Viscosity> = EmptyStruct::construct((4.0f32,));
    let _: EmptyStruct<Viscosity> = EmptyStruct::construct(());
    assert!(has_field::<Viscosity>("inv_nu"));
}
