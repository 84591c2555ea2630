//! # Flexure Formulas
//!
//! Ultimate limit state bending of a singly-reinforced rectangular section.
//!
//! ## Notation
//!
//! - `M` = Design moment (N·mm unless noted)
//! - `b` = Section width (mm)
//! - `h` = Total section depth (mm)
//! - `c` = Cover to reinforcement centroid (mm)
//! - `d` = Effective depth (mm)
//! - `f_cd` = Design concrete strength (MPa)
//! - `f_yd` = Design steel strength (MPa)
//! - `A_s` = Tension reinforcement area (mm²)
//!
//! ## Governing Equation
//!
//! ```text
//! M = 0.87 f_yd d A_s (1 - f_cd b d / (f_yd A_s))
//! ```
//!
//! Multiplying out, the A_s in the bracket cancels the outer A_s:
//!
//! ```text
//! M = 0.87 f_yd d A_s - 0.87 f_cd b d²
//! ```
//!
//! so the equation is linear in A_s and has exactly one root.

use crate::units::{KiloNewtonMeters, NewtonMillimeters};

/// Factor applied to f_yd in the moment of resistance
pub const STEEL_STRESS_FACTOR: f64 = 0.87;

/// Effective depth d = h - c
#[inline]
pub fn effective_depth(height: f64, cover: f64) -> f64 {
    height - cover
}

/// Design strength = characteristic strength / partial safety factor
#[inline]
pub fn design_strength(characteristic: f64, gamma: f64) -> f64 {
    characteristic / gamma
}

/// Convert a design moment from kN·m to N·mm
#[inline]
pub fn moment_to_nmm(moment_knm: f64) -> f64 {
    NewtonMillimeters::from(KiloNewtonMeters(moment_knm)).0
}

/// Moment of resistance for a given steel area, in the written
/// (unsimplified) form of the governing equation.
///
/// # Formula
/// M_Rd = 0.87 f_yd d A_s (1 - f_cd b d / (f_yd A_s))
///
/// # Returns
/// Moment in N·mm
#[inline]
pub fn moment_of_resistance(a_s: f64, f_yd: f64, f_cd: f64, b: f64, d: f64) -> f64 {
    STEEL_STRESS_FACTOR * f_yd * d * a_s * (1.0 - (f_cd * b * d) / (f_yd * a_s))
}

/// Required tension reinforcement area from the closed-form root.
///
/// # Formula
/// A_s = (M + 0.87 f_cd b d²) / (0.87 f_yd d)
///
/// # Arguments
/// * `moment_nmm` - Design moment (N·mm)
/// * `f_yd` - Design steel strength (MPa)
/// * `f_cd` - Design concrete strength (MPa)
/// * `b` - Section width (mm)
/// * `d` - Effective depth (mm)
///
/// # Returns
/// Steel area in mm²
#[inline]
pub fn required_steel_area(moment_nmm: f64, f_yd: f64, f_cd: f64, b: f64, d: f64) -> f64 {
    (moment_nmm + STEEL_STRESS_FACTOR * f_cd * b * d * d) / (STEEL_STRESS_FACTOR * f_yd * d)
}
