//! Forces kernel parameters for a few SPH specializations.
//!
//! Run with `cargo run --example forces_params --features tracing`.

use cond_params::compose::log_layout;
use cond_params::prelude::*;
use cond_params::{cond_struct, pred};

// =============================================================================
// Build-time options
// =============================================================================

#[derive(OptionRange, Debug, Clone, Copy, PartialEq, Eq)]
#[option(name = "rheology")]
enum Rheology {
    Inviscid,
    Newtonian,
    Bingham,
    Papanastasiou,
    #[option(name = "Power-law")]
    PowerLaw,
    #[option(name = "Herschel-Bulkley")]
    HerschelBulkley,
}

impl Rheology {
    const fn yielding(self) -> bool {
        self.index() > Rheology::Newtonian.index() && !self.is(Rheology::PowerLaw)
    }

    const fn regularized(self) -> bool {
        self.is(Rheology::Papanastasiou)
    }
}

#[derive(OptionRange, Debug, Clone, Copy, PartialEq, Eq)]
#[option(name = "boundary model")]
enum BoundaryModel {
    #[option(name = "Lennard-Jones")]
    LjBoundary,
    #[option(name = "Dynamic")]
    DynBoundary,
    #[option(name = "Semi-analytical")]
    SaBoundary,
}

const RHEOLOGY: Rheology = Rheology::Papanastasiou;

// =============================================================================
// Member groups
// =============================================================================

#[derive(Component, Debug, Clone, Copy)]
struct SaSegments {
    gam_n: [f32; 4],
}

#[derive(Component, Debug, Clone, Copy)]
struct KepsArrays {
    turbvisc: f32,
    keps_dkde: f32,
}

#[derive(Component, Debug, Clone, Copy)]
struct WaterDepth {
    ioflux: f32,
}

#[derive(Component, Debug, Clone, Copy)]
struct YieldStrength {
    yield_strength: f32,
}

#[derive(Component, Debug, Clone, Copy)]
struct Regularization {
    visc_regularization: f32,
}

// =============================================================================
// Specializations
// =============================================================================

trait ForcesSpec: 'static {
    type SaBoundary: Bool;
    type KEpsilon: Bool;
    type OpenBoundaries: Bool;
}

struct SaKeps;
impl ForcesSpec for SaKeps {
    type SaBoundary = Present;
    type KEpsilon = Present;
    type OpenBoundaries = Present;
}

struct DynLaminar;
impl ForcesSpec for DynLaminar {
    type SaBoundary = Absent;
    type KEpsilon = Absent;
    type OpenBoundaries = Present;
}

#[derive(Composed)]
#[composed(Debug, Clone, Copy)]
struct ForcesParams<S: ForcesSpec> {
    slength: f32,
    deltap: f32,
    sa: Select<S::SaBoundary, SaSegments>,
    keps: Select<S::KEpsilon, KepsArrays>,
    water_depth: Select<pred!(S::SaBoundary & S::OpenBoundaries), WaterDepth>,
    yield_strength: cond_struct!(RHEOLOGY.yielding(), YieldStrength),
    regularization: cond_struct!(RHEOLOGY.regularized(), Regularization),
}

fn params<S: ForcesSpec>() -> ForcesParams<S> {
    ForcesParams::construct((
        0.013f32,
        0.01f32,
        ([0.0f32, 0.0, 1.0, 0.5],),
        (1.0e-3f32, 0.0f32),
        (0.2f32,),
        (5.0f32,),
        (100.0f32,),
    ))
}

fn turbulent_viscosity<S: ForcesSpec>(p: &ForcesParams<S>) -> f32 {
    <S::KEpsilon as Bool>::when::<KepsArrays, _, _, _>(&p.keps, |k| k.turbvisc, || 0.0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    log_layout::<ForcesParams<SaKeps>>();
    log_layout::<ForcesParams<DynLaminar>>();

    let sa = params::<SaKeps>();
    let dyn_lam = params::<DynLaminar>();
    tracing::info!(
        rheology = %RHEOLOGY,
        sa_turbvisc = turbulent_viscosity(&sa),
        dyn_turbvisc = turbulent_viscosity(&dyn_lam),
        sa_ioflux = sa.water_depth.ioflux,
        yield_strength = sa.yield_strength.yield_strength,
        "parameters built"
    );
    tracing::debug!(?dyn_lam);

    match "semi".parse::<BoundaryModel>() {
        Ok(model) => tracing::info!(%model, index = model.index(), "boundary model parsed"),
        Err(err) => tracing::warn!(%err, "boundary model rejected"),
    }
}
