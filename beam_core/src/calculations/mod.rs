//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - an input type (JSON-serializable)
//! - a result type (JSON-serializable)
//! - a pure function `input -> CalcResult<result>`
//!
//! ## Available Calculations
//!
//! - [`reinforcement`] - Tension steel for a singly-reinforced rectangular section

pub mod reinforcement;

pub use reinforcement::{
    design, format_result, solve, BeamSection, ReinforcementOutput, ReinforcementResult,
};
