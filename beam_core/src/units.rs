//! # Unit Types
//!
//! Moment wrappers for the one unit change the solve performs. Section
//! inputs arrive in kN·m, while the flexure formulas work in N·mm
//! (MPa × mm × mm²).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{KiloNewtonMeters, NewtonMillimeters};
//!
//! let moment_nmm: NewtonMillimeters = KiloNewtonMeters(50.0).into();
//! assert_eq!(moment_nmm.0, 50.0e6);
//! ```

use serde::{Deserialize, Serialize};

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// N·mm per kN·m (1000 N/kN × 1000 mm/m)
pub const NMM_PER_KNM: f64 = 1.0e6;

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * NMM_PER_KNM)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / NMM_PER_KNM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let m = KiloNewtonMeters(1.5);
        let nmm: NewtonMillimeters = m.into();
        assert_eq!(nmm.0, 1.5e6);

        let back: KiloNewtonMeters = nmm.into();
        assert_eq!(back.0, 1.5);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let m = KiloNewtonMeters(50.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "50.0");

        let roundtrip: KiloNewtonMeters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
