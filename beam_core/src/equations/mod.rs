//! # Design Equations
//!
//! This module contains the equations used to size tension reinforcement.
//! Having equations in one place enables:
//! - Easy verification against code references (EN 1992-1-1, BS 8110)
//! - Documentation of assumptions
//! - A single implementation shared by the solver and the report
//!
//! ## Modules
//!
//! - [`flexure`] - Effective depth, design strengths, moment of resistance, steel area
//! - [`registry`] - Equation metadata and tracking for PDF appendix generation
//!
//! ## Units
//!
//! - Section dimensions in mm, strengths in MPa
//! - Moments enter in kNm and are converted to Nmm before use
//! - Steel area in mm²

pub mod flexure;
pub mod registry;

pub use flexure::{
    design_strength,
    effective_depth,
    moment_of_resistance,
    moment_to_nmm,
    required_steel_area,
    STEEL_STRESS_FACTOR,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
    reinforcement_equations,
};
