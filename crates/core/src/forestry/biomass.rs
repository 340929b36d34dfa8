//! Allometric tree biomass and CO2-equivalent
//!
//! Above-ground biomass from the pantropical power law
//!
//! AGB = a × (ρ × D² × H)^b
//!
//! then below-ground biomass as a fixed root:shoot ratio, dry matter fraction,
//! carbon fraction and the CO2/C molecular mass ratio (44/12 ≈ 3.67).
//!
//! # References
//! - Chave, J. et al. (2014). "Improved allometric models to estimate the
//!   aboveground biomass of tropical trees". Global Change Biology, 20(10),
//!   3177-3190

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::tree::TreeMeasurement;
use crate::core_types::units::{Centimeters, Kilograms, Meters, Tonnes};

/// Coefficients of the biomass / carbon chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllometricCoefficients {
    /// Power-law multiplier `a`
    pub agb_multiplier: f64,
    /// Power-law exponent `b`
    pub agb_exponent: f64,
    /// Below-ground biomass as a fraction of AGB
    pub root_shoot_ratio: f64,
    /// Dry weight as a fraction of total biomass
    pub dry_matter_fraction: f64,
    /// Carbon as a fraction of dry weight
    pub carbon_fraction: f64,
    /// kg CO2 per kg C
    pub co2_per_carbon: f64,
}

impl Default for AllometricCoefficients {
    fn default() -> Self {
        Self {
            agb_multiplier: 0.0673,
            agb_exponent: 0.976,
            root_shoot_ratio: 0.2,
            dry_matter_fraction: 0.725,
            carbon_fraction: 0.5,
            co2_per_carbon: 3.67,
        }
    }
}

/// Biomass and carbon figures for one tree
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BiomassEstimate {
    /// Above-ground biomass
    pub agb: Kilograms,
    /// Below-ground biomass
    pub bgb: Kilograms,
    /// AGB + BGB
    pub total_biomass: Kilograms,
    /// Dry matter in the total biomass
    pub total_dry_weight: Kilograms,
    /// Carbon content of the dry matter
    pub total_carbon: Kilograms,
    /// CO2-equivalent of the stored carbon
    pub co2: Kilograms,
    /// CO2-equivalent in tonnes
    pub co2_tonnes: Tonnes,
}

impl BiomassEstimate {
    /// All-zero estimate used when a tree cannot be measured
    pub const fn zero() -> Self {
        Self {
            agb: Kilograms::ZERO,
            bgb: Kilograms::ZERO,
            total_biomass: Kilograms::ZERO,
            total_dry_weight: Kilograms::ZERO,
            total_carbon: Kilograms::ZERO,
            co2: Kilograms::ZERO,
            co2_tonnes: Tonnes::ZERO,
        }
    }

    /// Whether every figure is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Dimension usable in the power law: present, finite and strictly positive
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl AllometricCoefficients {
    /// Estimate biomass and CO2-equivalent for one tree
    ///
    /// # Arguments
    /// * `tree` - Diameter (cm), height (m) and optional wood density (g/cm³)
    ///
    /// # Returns
    /// [`BiomassEstimate::zero`] when diameter or height is missing, zero,
    /// negative or not finite, or when the figures overflow `f64`; otherwise
    /// the full chain of figures
    pub fn estimate(&self, tree: &TreeMeasurement) -> BiomassEstimate {
        let (Some(diameter), Some(height)) = (
            usable(tree.diameter.map(Centimeters::value)),
            usable(tree.height.map(Meters::value)),
        ) else {
            return BiomassEstimate::zero();
        };
        let rho = *tree.effective_wood_density();

        let agb = Kilograms::new(
            self.agb_multiplier * (rho * diameter.powi(2) * height).powf(self.agb_exponent),
        );
        let bgb = agb * self.root_shoot_ratio;
        let total_biomass = agb + bgb;
        let total_dry_weight = total_biomass * self.dry_matter_fraction;
        let total_carbon = total_dry_weight * self.carbon_fraction;
        let co2 = total_carbon * self.co2_per_carbon;
        if !co2.is_finite() {
            debug!(diameter, height, "biomass overflowed, reporting zero");
            return BiomassEstimate::zero();
        }

        BiomassEstimate {
            agb,
            bgb,
            total_biomass,
            total_dry_weight,
            total_carbon,
            co2,
            co2_tonnes: co2.to_tonnes(),
        }
    }
}

/// Estimate biomass with the default coefficients
pub fn estimate_biomass(tree: &TreeMeasurement) -> BiomassEstimate {
    AllometricCoefficients::default().estimate(tree)
}

/// Estimate biomass for many trees in parallel, preserving input order
pub fn estimate_biomass_batch(trees: &[TreeMeasurement]) -> Vec<BiomassEstimate> {
    let coefficients = AllometricCoefficients::default();
    trees.par_iter().map(|tree| coefficients.estimate(tree)).collect()
}
