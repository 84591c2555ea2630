//! Reinforcing steel properties.
//!
//! Tension reinforcement is described by its characteristic yield strength
//! f_yk and partial safety factor gamma_s, giving f_yd = f_yk / gamma_s.

use serde::{Deserialize, Serialize};

use crate::equations::flexure::design_strength;
use crate::errors::{CalcError, CalcResult};

/// Default characteristic yield strength (MPa)
pub const DEFAULT_F_YK_MPA: f64 = 500.0;

/// Default partial safety factor for reinforcing steel
pub const DEFAULT_GAMMA_S: f64 = 1.15;

/// Reinforcing bar yield strength and its partial safety factor.
///
/// ## JSON Example
///
/// ```json
/// { "f_yk_mpa": 500.0, "gamma_s": 1.15 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinforcingSteel {
    /// Characteristic yield strength f_yk (MPa)
    pub f_yk_mpa: f64,
    /// Partial safety factor gamma_s
    pub gamma_s: f64,
}

impl Default for ReinforcingSteel {
    fn default() -> Self {
        ReinforcingSteel {
            f_yk_mpa: DEFAULT_F_YK_MPA,
            gamma_s: DEFAULT_GAMMA_S,
        }
    }
}

impl ReinforcingSteel {
    pub fn new(f_yk_mpa: f64, gamma_s: f64) -> Self {
        ReinforcingSteel { f_yk_mpa, gamma_s }
    }

    /// Design yield strength f_yd = f_yk / gamma_s (MPa)
    pub fn design_strength_mpa(&self) -> f64 {
        design_strength(self.f_yk_mpa, self.gamma_s)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.f_yk_mpa.is_finite() || self.f_yk_mpa <= 0.0 {
            return Err(CalcError::domain(
                "f_yk_mpa",
                self.f_yk_mpa.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        if !self.gamma_s.is_finite() || self.gamma_s <= 0.0 {
            return Err(CalcError::domain(
                "gamma_s",
                self.gamma_s.to_string(),
                "Partial safety factor for steel must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_design_strength() {
        let steel = ReinforcingSteel::default();
        // 500 / 1.15
        assert_relative_eq!(steel.design_strength_mpa(), 434.782_608_695_652_2, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_gamma_rejected() {
        assert!(ReinforcingSteel::new(500.0, -1.15).validate().is_err());
        assert!(ReinforcingSteel::new(0.0, 1.15).validate().is_err());
        assert!(ReinforcingSteel::default().validate().is_ok());
    }
}
