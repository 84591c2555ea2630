//! # Singly-Reinforced Section Design
//!
//! Sizes the tension reinforcement of a rectangular concrete beam section for a
//! design bending moment at the ultimate limit state.
//!
//! ## Assumptions
//!
//! - Rectangular section, single layer of tension steel
//! - Reinforcement yields (design strength f_yd)
//! - No minimum/maximum steel ratio checks
//! - Shear, span and support lengths are carried for reporting only
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::reinforcement::{format_result, solve, BeamSection};
//!
//! let section = BeamSection::default(); // 50 kNm on a 300 x 500 section, 30 mm cover
//! let result = solve(&section).unwrap();
//!
//! println!("{}", format_result(result.effective_depth_mm, result.required_steel_area_mm2));
//! assert_eq!(result.effective_depth_mm, 470.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::flexure::{effective_depth, moment_to_nmm, required_steel_area};
use crate::errors::{CalcError, CalcResult};
use crate::formula::render_formula_expression;
use crate::materials::{DesignStrengths, MaterialConfig};

/// Input parameters for a singly-reinforced rectangular beam section.
///
/// Construct it once with final values; every derived quantity (d, f_cd,
/// f_yd, A_s) is recomputed from these fields, so the solve and the formula
/// rendering always agree.
///
/// ## JSON Example
///
/// Material fields are flattened; anything omitted takes its default.
///
/// ```json
/// {
///   "moment_knm": 50.0,
///   "shear_kn": 20.0,
///   "length_m": 6.0,
///   "width_mm": 300.0,
///   "height_mm": 500.0,
///   "cover_mm": 30.0,
///   "left_support_mm": 0.0,
///   "right_support_mm": 0.0,
///   "f_ck_mpa": 30.0,
///   "gamma_c": 1.5,
///   "f_yk_mpa": 500.0,
///   "gamma_s": 1.15
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamSection {
    /// Design bending moment M (kNm)
    pub moment_knm: f64,

    /// Design shear force (kN). Reserved; not used by the flexural solve.
    pub shear_kn: f64,

    /// Beam span (m). Reserved; not used by the flexural solve.
    pub length_m: f64,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Total section depth h (mm)
    pub height_mm: f64,

    /// Cover to the reinforcement centroid (mm)
    pub cover_mm: f64,

    /// Left support bearing length (mm). Reserved.
    pub left_support_mm: f64,

    /// Right support bearing length (mm). Reserved.
    pub right_support_mm: f64,

    /// Concrete and steel properties
    #[serde(flatten)]
    pub materials: MaterialConfig,
}

impl Default for BeamSection {
    fn default() -> Self {
        BeamSection {
            moment_knm: 50.0,
            shear_kn: 20.0,
            length_m: 6.0,
            width_mm: 300.0,
            height_mm: 500.0,
            cover_mm: 30.0,
            left_support_mm: 0.0,
            right_support_mm: 0.0,
            materials: MaterialConfig::default(),
        }
    }
}

impl BeamSection {
    /// Create a section with the given moment and geometry and default
    /// materials. Reserved fields start at zero.
    pub fn new(moment_knm: f64, width_mm: f64, height_mm: f64, cover_mm: f64) -> Self {
        BeamSection {
            moment_knm,
            shear_kn: 0.0,
            length_m: 0.0,
            width_mm,
            height_mm,
            cover_mm,
            left_support_mm: 0.0,
            right_support_mm: 0.0,
            materials: MaterialConfig::default(),
        }
    }

    /// Replace the material configuration.
    pub fn with_materials(mut self, materials: MaterialConfig) -> Self {
        self.materials = materials;
        self
    }

    /// Set the reserved load/span fields carried for reporting.
    pub fn with_reserved(mut self, shear_kn: f64, length_m: f64, left_support_mm: f64, right_support_mm: f64) -> Self {
        self.shear_kn = shear_kn;
        self.length_m = length_m;
        self.left_support_mm = left_support_mm;
        self.right_support_mm = right_support_mm;
        self
    }

    /// Validate input parameters.
    ///
    /// Only fields that take part in the solve are checked.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("moment_knm", self.moment_knm),
            ("width_mm", self.width_mm),
            ("height_mm", self.height_mm),
            ("cover_mm", self.cover_mm),
        ] {
            if !value.is_finite() {
                return Err(CalcError::domain(field, value.to_string(), "Value must be a finite number"));
            }
        }
        if self.moment_knm < 0.0 {
            return Err(CalcError::domain(
                "moment_knm",
                self.moment_knm.to_string(),
                "Design moment must not be negative",
            ));
        }
        if self.width_mm <= 0.0 {
            return Err(CalcError::domain(
                "width_mm",
                self.width_mm.to_string(),
                "Section width must be positive",
            ));
        }
        if self.height_mm <= 0.0 {
            return Err(CalcError::domain(
                "height_mm",
                self.height_mm.to_string(),
                "Section height must be positive",
            ));
        }
        if self.cover_mm < 0.0 {
            return Err(CalcError::domain(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover must not be negative",
            ));
        }
        if self.cover_mm >= self.height_mm {
            return Err(CalcError::domain(
                "cover_mm",
                self.cover_mm.to_string(),
                format!(
                    "Cover must be less than section height ({} mm); effective depth would be {} mm",
                    self.height_mm,
                    self.effective_depth_mm()
                ),
            ));
        }
        self.materials.validate()
    }

    /// Effective depth d = h - c (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        effective_depth(self.height_mm, self.cover_mm)
    }

    /// Design moment in Nmm
    pub fn moment_nmm(&self) -> f64 {
        moment_to_nmm(self.moment_knm)
    }

    /// Design strengths f_cd and f_yd (MPa)
    pub fn design_strengths(&self) -> DesignStrengths {
        self.materials.design_strengths()
    }
}

/// Results from the reinforcement solve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "effective_depth_mm": 470.0,
///   "design_concrete_strength_mpa": 20.0,
///   "design_steel_strength_mpa": 434.7826086956522,
///   "required_steel_area_mm2": 6767.242357544633
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementResult {
    /// Effective depth d (mm)
    pub effective_depth_mm: f64,

    /// f_cd = f_ck / gamma_c (MPa)
    pub design_concrete_strength_mpa: f64,

    /// f_yd = f_yk / gamma_s (MPa)
    pub design_steel_strength_mpa: f64,

    /// Required tension reinforcement A_s (mm²)
    pub required_steel_area_mm2: f64,
}

impl ReinforcementResult {
    /// Two-line display text, see [`format_result`]
    pub fn result_text(&self) -> String {
        format_result(self.effective_depth_mm, self.required_steel_area_mm2)
    }
}

/// The complete output handed to presentation collaborators.
///
/// Field names follow the external contract (camelCase in JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReinforcementOutput {
    /// Effective depth (mm)
    pub effective_depth: f64,
    /// Required steel area (mm²)
    pub required_steel_area: f64,
    /// Two-line result text
    pub result_text: String,
    /// LaTeX rendering of the substituted governing equation
    pub formula_expression: String,
}

/// Solve for the required tension reinforcement area.
///
/// This is a pure function: identical sections give bit-identical results.
///
/// # Arguments
///
/// * `section` - Section geometry, moment and materials
///
/// # Returns
///
/// * `Ok(ReinforcementResult)` - d, f_cd, f_yd and A_s
/// * `Err(CalcError::Domain)` - cover ≥ height, non-positive width or
///   safety factor, or another physically undefined input
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::reinforcement::{solve, BeamSection};
///
/// let result = solve(&BeamSection::new(120.0, 250.0, 450.0, 40.0)).expect("valid section");
/// assert!(result.required_steel_area_mm2 > 0.0);
/// ```
pub fn solve(section: &BeamSection) -> CalcResult<ReinforcementResult> {
    section.validate()?;

    let d = section.effective_depth_mm();
    let strengths = section.design_strengths();

    let a_s = required_steel_area(
        section.moment_nmm(),
        strengths.f_yd_mpa,
        strengths.f_cd_mpa,
        section.width_mm,
        d,
    );

    tracing::debug!(
        d_mm = d,
        f_cd_mpa = strengths.f_cd_mpa,
        f_yd_mpa = strengths.f_yd_mpa,
        a_s_mm2 = a_s,
        "solved tension reinforcement"
    );

    Ok(ReinforcementResult {
        effective_depth_mm: d,
        design_concrete_strength_mpa: strengths.f_cd_mpa,
        design_steel_strength_mpa: strengths.f_yd_mpa,
        required_steel_area_mm2: a_s,
    })
}

/// Format the effective depth and steel area as two display lines.
///
/// ```rust
/// use beam_core::calculations::reinforcement::format_result;
///
/// assert_eq!(
///     format_result(470.0, 1234.567),
///     "Effective Depth (d): 470.00 mm\nRequired Reinforcement Area (A_s): 1234.57 mm²"
/// );
/// ```
pub fn format_result(d_mm: f64, a_s_mm2: f64) -> String {
    format!(
        "Effective Depth (d): {:.2} mm\nRequired Reinforcement Area (A_s): {:.2} mm²",
        d_mm, a_s_mm2
    )
}

/// Solve and render everything a collaborator displays.
///
/// All-or-nothing: on error no partial output is produced.
pub fn design(section: &BeamSection) -> CalcResult<ReinforcementOutput> {
    let result = solve(section)?;
    Ok(ReinforcementOutput {
        effective_depth: result.effective_depth_mm,
        required_steel_area: result.required_steel_area_mm2,
        result_text: result.result_text(),
        formula_expression: render_formula_expression(section),
    })
}
