//! Concrete material properties.
//!
//! Concrete is described by its characteristic cylinder strength f_ck and the
//! partial safety factor gamma_c. The design strength used in flexure is
//! f_cd = f_ck / gamma_c.

use serde::{Deserialize, Serialize};

use crate::equations::flexure::design_strength;
use crate::errors::{CalcError, CalcResult};

/// Default characteristic compressive strength (MPa)
pub const DEFAULT_F_CK_MPA: f64 = 30.0;

/// Default partial safety factor for concrete
pub const DEFAULT_GAMMA_C: f64 = 1.5;

/// Concrete compressive strength and its partial safety factor.
///
/// ## JSON Example
///
/// ```json
/// { "f_ck_mpa": 30.0, "gamma_c": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concrete {
    /// Characteristic compressive strength f_ck (MPa)
    pub f_ck_mpa: f64,
    /// Partial safety factor gamma_c
    pub gamma_c: f64,
}

impl Default for Concrete {
    fn default() -> Self {
        Concrete {
            f_ck_mpa: DEFAULT_F_CK_MPA,
            gamma_c: DEFAULT_GAMMA_C,
        }
    }
}

impl Concrete {
    pub fn new(f_ck_mpa: f64, gamma_c: f64) -> Self {
        Concrete { f_ck_mpa, gamma_c }
    }

    /// Design compressive strength f_cd = f_ck / gamma_c (MPa)
    pub fn design_strength_mpa(&self) -> f64 {
        design_strength(self.f_ck_mpa, self.gamma_c)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if !self.f_ck_mpa.is_finite() || self.f_ck_mpa <= 0.0 {
            return Err(CalcError::domain(
                "f_ck_mpa",
                self.f_ck_mpa.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if !self.gamma_c.is_finite() || self.gamma_c <= 0.0 {
            return Err(CalcError::domain(
                "gamma_c",
                self.gamma_c.to_string(),
                "Partial safety factor for concrete must be positive",
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
        let concrete = Concrete::default();
        assert_relative_eq!(concrete.design_strength_mpa(), 20.0);
    }

    #[test]
    fn test_zero_gamma_rejected() {
        let err = Concrete::new(30.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::Domain { ref field, .. } if field == "gamma_c"));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let concrete: Concrete = serde_json::from_str(r#"{ "f_ck_mpa": 40.0 }"#).unwrap();
        assert_eq!(concrete.f_ck_mpa, 40.0);
        assert_eq!(concrete.gamma_c, DEFAULT_GAMMA_C);
    }
}
