//! Interactive collection of section inputs.
//!
//! Each of the twelve values is prompted with its default. Empty input takes
//! the default; anything else must parse as a number.

use std::io::{BufRead, Write};

use beam_core::calculations::BeamSection;
use beam_core::materials::{Concrete, MaterialConfig, ReinforcingSteel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw text that is not a number.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Invalid number for {field}: '{input}'")]
pub struct InputFormatError {
    pub field: String,
    pub input: String,
}

/// A prompted input with its display label and unit.
#[derive(Debug, Clone, Copy)]
pub struct InputField {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub default: f64,
}

impl InputField {
    const fn new(key: &'static str, label: &'static str, unit: &'static str, default: f64) -> Self {
        InputField { key, label, unit, default }
    }

    fn prompt(&self) -> String {
        if self.unit.is_empty() {
            format!("{} [{}]: ", self.label, self.default)
        } else {
            format!("{} ({}) [{}]: ", self.label, self.unit, self.default)
        }
    }
}

/// Prompt order; keys match the section's JSON field names.
pub const INPUT_FIELDS: [InputField; 12] = [
    InputField::new("moment_knm", "Design moment", "kNm", 50.0),
    InputField::new("shear_kn", "Design shear force", "kN", 20.0),
    InputField::new("length_m", "Beam length", "m", 6.0),
    InputField::new("width_mm", "Width", "mm", 300.0),
    InputField::new("height_mm", "Height", "mm", 500.0),
    InputField::new("cover_mm", "Concrete cover", "mm", 30.0),
    InputField::new("left_support_mm", "Left support length", "mm", 0.0),
    InputField::new("right_support_mm", "Right support length", "mm", 0.0),
    InputField::new("f_ck_mpa", "Concrete strength f_ck", "MPa", 30.0),
    InputField::new("gamma_c", "Concrete safety factor gamma_c", "", 1.5),
    InputField::new("f_yk_mpa", "Steel yield strength f_yk", "MPa", 500.0),
    InputField::new("gamma_s", "Steel safety factor gamma_s", "", 1.15),
];

/// Parse one raw value. Blank input yields `default`.
pub fn parse_value(field: &str, raw: &str, default: f64) -> Result<f64, InputFormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse::<f64>().map_err(|_| InputFormatError {
        field: field.to_string(),
        input: trimmed.to_string(),
    })
}

/// Build a section from values in [`INPUT_FIELDS`] order.
pub fn section_from_values(values: &[f64; 12]) -> BeamSection {
    let [moment, shear, length, width, height, cover, left, right, f_ck, gamma_c, f_yk, gamma_s] = *values;
    BeamSection::new(moment, width, height, cover)
        .with_reserved(shear, length, left, right)
        .with_materials(MaterialConfig::new(
            Concrete::new(f_ck, gamma_c),
            ReinforcingSteel::new(f_yk, gamma_s),
        ))
}

/// Prompt for every field on `output`, reading answers from `input`.
///
/// End of input takes the remaining defaults.
pub fn prompt_section<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<BeamSection, PromptError> {
    let mut values = [0.0; 12];

    for (slot, field) in values.iter_mut().zip(INPUT_FIELDS.iter()) {
        write!(output, "{}", field.prompt())?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        *slot = parse_value(field.key, &line, field.default)?;
    }

    Ok(section_from_values(&values))
}

/// Failure while prompting: bad text or a broken terminal.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Format(#[from] InputFormatError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
