//! # beam_core - Reinforced Concrete Beam Design Engine
//!
//! `beam_core` sizes the tension reinforcement of a singly-reinforced
//! rectangular concrete section at the ultimate limit state. All inputs and
//! outputs are JSON-serializable, so the same types drive the command-line
//! tool, the PDF report and any external caller.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **All-or-nothing**: An invalid section yields an error and no partial result
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{design, BeamSection};
//!
//! let output = design(&BeamSection::default()).unwrap();
//! assert_eq!(output.effective_depth, 470.0);
//! assert!((output.required_steel_area - 6767.242357544633).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section inputs and the reinforcement solver
//! - [`equations`] - Flexure formulas and the equation registry
//! - [`materials`] - Concrete and reinforcing steel
//! - [`formula`] - Substituted formula rendering (LaTeX and Typst)
//! - [`pdf`] - Calculation report generation
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Section loading and atomic report writes

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod formula;
pub mod materials;
pub mod pdf;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{design, solve, BeamSection, ReinforcementOutput, ReinforcementResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_section, write_report};
pub use pdf::{render_section_pdf, ReportInfo};
