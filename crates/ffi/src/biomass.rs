//! FFI entry point for per-tree biomass and CO2-equivalent.

use agro_engine_core::{
    estimate_biomass, BiomassEstimate, Centimeters, GramsPerCubicCentimeter, Meters,
    TreeMeasurement,
};

use crate::error::{AgroErrorCode, DefaultAgroError};
use crate::helpers::handle_ffi_result;

/// Biomass figures for one tree, all in kilograms except `co2_tonnes`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgroBiomassEstimate {
    /// Above-ground biomass (kg).
    pub agb_kg: f64,
    /// Below-ground biomass (kg).
    pub bgb_kg: f64,
    /// AGB + BGB (kg).
    pub total_biomass_kg: f64,
    /// Dry matter (kg).
    pub total_dry_weight_kg: f64,
    /// Carbon (kg).
    pub total_carbon_kg: f64,
    /// CO2-equivalent (kg).
    pub co2_kg: f64,
    /// CO2-equivalent (t).
    pub co2_tonnes: f64,
}

impl From<BiomassEstimate> for AgroBiomassEstimate {
    fn from(e: BiomassEstimate) -> Self {
        Self {
            agb_kg: *e.agb,
            bgb_kg: *e.bgb,
            total_biomass_kg: *e.total_biomass,
            total_dry_weight_kg: *e.total_dry_weight,
            total_carbon_kg: *e.total_carbon,
            co2_kg: *e.co2,
            co2_tonnes: *e.co2_tonnes,
        }
    }
}

/// Estimate biomass for one tree.
///
/// # Parameters
/// - `diameter_cm`: Diameter at breast height; `0` or `NaN` means unknown
/// - `height_m`: Tree height; `0` or `NaN` means unknown
/// - `wood_density`: g/cm³; `0` or `NaN` selects the default 0.6
/// - `out_estimate`: Receives the estimate (all zero when a dimension is unknown
///   or the figures would overflow)
///
/// # Returns
/// - `Ok` with `*out_estimate` written
/// - `NullPointer` if `out_estimate` is null
///
/// # Safety
/// `out_estimate` must be null or point to a writable `AgroBiomassEstimate`.
#[no_mangle]
pub unsafe extern "C" fn agro_biomass_estimate(
    diameter_cm: f64,
    height_m: f64,
    wood_density: f64,
    out_estimate: *mut AgroBiomassEstimate,
) -> AgroErrorCode {
    // SAFETY: caller guarantees `out_estimate` is null or writable.
    let Some(out) = (unsafe { out_estimate.as_mut() }) else {
        return handle_ffi_result(Err(DefaultAgroError::null_pointer("out_estimate")));
    };

    let tree = TreeMeasurement {
        diameter: Some(Centimeters::new(diameter_cm)),
        height: Some(Meters::new(height_m)),
        wood_density: Some(GramsPerCubicCentimeter::new(wood_density)),
    };
    *out = AgroBiomassEstimate::from(estimate_biomass(&tree));
    handle_ffi_result::<DefaultAgroError>(Ok(()))
}
