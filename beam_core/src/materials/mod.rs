//! # Materials
//!
//! Material definitions for reinforced concrete section design.
//!
//! ## Material Types
//!
//! - **Concrete**: characteristic compressive strength and gamma_c
//! - **Reinforcing steel**: characteristic yield strength and gamma_s
//!
//! Both are carried together as a [`MaterialConfig`] on every
//! [`BeamSection`](crate::calculations::BeamSection). The numeric solve and
//! the formula rendering read the same config, so there is exactly one source
//! for the four material values.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Concrete, MaterialConfig, ReinforcingSteel};
//!
//! let materials = MaterialConfig::new(Concrete::new(35.0, 1.5), ReinforcingSteel::default());
//! let strengths = materials.design_strengths();
//! println!("f_cd = {:.2} MPa, f_yd = {:.2} MPa", strengths.f_cd_mpa, strengths.f_yd_mpa);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::Concrete;
pub use steel::ReinforcingSteel;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Concrete and steel properties used by a calculation.
///
/// ## JSON Serialization
///
/// Fields are flattened so a config reads as one flat object. Missing fields
/// take the defaults (f_ck = 30, gamma_c = 1.5, f_yk = 500, gamma_s = 1.15):
///
/// ```json
/// { "f_ck_mpa": 30.0, "gamma_c": 1.5, "f_yk_mpa": 500.0, "gamma_s": 1.15 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialConfig {
    #[serde(flatten)]
    pub concrete: Concrete,
    #[serde(flatten)]
    pub steel: ReinforcingSteel,
}

/// Design strengths derived from a [`MaterialConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignStrengths {
    /// f_cd = f_ck / gamma_c (MPa)
    pub f_cd_mpa: f64,
    /// f_yd = f_yk / gamma_s (MPa)
    pub f_yd_mpa: f64,
}

impl MaterialConfig {
    pub fn new(concrete: Concrete, steel: ReinforcingSteel) -> Self {
        MaterialConfig { concrete, steel }
    }

    /// Validate both materials.
    pub fn validate(&self) -> CalcResult<()> {
        self.concrete.validate()?;
        self.steel.validate()
    }

    /// Compute f_cd and f_yd.
    pub fn design_strengths(&self) -> DesignStrengths {
        DesignStrengths {
            f_cd_mpa: self.concrete.design_strength_mpa(),
            f_yd_mpa: self.steel.design_strength_mpa(),
        }
    }
}
