//! Tree biomass and carbon sequestration estimates

pub mod biomass;

pub use biomass::{
    estimate_biomass, estimate_biomass_batch, AllometricCoefficients, BiomassEstimate,
};
