//! C ABI for the agronomic decision engine.
//!
//! Every entry point returns an [`AgroErrorCode`]; on failure the message is
//! available from [`agro_get_last_error`] on the same thread. Calls keep no
//! state between invocations beyond that per-thread error slot.
//!
//! The C header `AgroEngineFFI.h` is generated by `build.rs` with cbindgen.

mod biomass;
mod error;
mod helpers;
mod planting;

pub use biomass::{agro_biomass_estimate, AgroBiomassEstimate};
pub use error::{agro_get_last_error, agro_get_last_error_code, AgroErrorCode};
pub use planting::{
    agro_degree_days, agro_is_favorable, agro_planting_window,
    agro_planting_window_with_threshold, AgroDailyTemperature, AgroDegreeDayRecord,
    AgroPlantingWindow,
};
