//! # Formula Rendering
//!
//! Display strings of the governing equation with the section's numbers
//! substituted in. The unsimplified form is shown (A_s still inside the
//! bracket) so a reader can follow the derivation; the numeric A_s always
//! comes from the closed form in [`solve`](crate::calculations::solve).
//!
//! Two notations are produced from the same values:
//! - LaTeX, for on-screen rendering and the output contract
//! - Typst math, for the PDF report
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::BeamSection;
//! use beam_core::formula::render_formula_expression;
//!
//! let latex = render_formula_expression(&BeamSection::default());
//! assert!(latex.contains("50000000 \\, \\text{Nmm}"));
//! ```

use crate::calculations::BeamSection;
use crate::equations::flexure::STEEL_STRESS_FACTOR;

/// Numbers substituted into a rendered formula
struct Substitution {
    moment_nmm: String,
    f_yd: String,
    f_cd: String,
    d: String,
    b: String,
}

impl Substitution {
    fn from_section(section: &BeamSection) -> Self {
        let strengths = section.design_strengths();
        Substitution {
            moment_nmm: format_number(section.moment_nmm()),
            f_yd: format_number(strengths.f_yd_mpa),
            f_cd: format_number(strengths.f_cd_mpa),
            d: format_number(section.effective_depth_mm()),
            b: format_number(section.width_mm),
        }
    }
}

/// LaTeX rendering of the substituted governing equation.
///
/// Structure:
/// `A_s = (M) / (0.87 · f_yd · d · (1 − (f_cd · b · d)/(f_yd · A_s)))`
pub fn render_formula_expression(section: &BeamSection) -> String {
    let s = Substitution::from_section(section);
    let k = format_number(STEEL_STRESS_FACTOR);
    format!(
        "A_s = \\frac{{{m} \\, \\text{{Nmm}}}}{{{k} \\cdot {fyd} \\, \\text{{MPa}} \\cdot {d} \\, \\text{{mm}} \\, \
         \\left(1 - \\frac{{{fcd} \\, \\text{{MPa}} \\cdot {b} \\, \\text{{mm}} \\cdot {d} \\, \\text{{mm}}}}\
         {{{fyd} \\, \\text{{MPa}} \\cdot A_s}}\\right)}}",
        m = s.moment_nmm,
        k = k,
        fyd = s.f_yd,
        fcd = s.f_cd,
        d = s.d,
        b = s.b,
    )
}

/// Typst math rendering of the same equation (without the `$` delimiters).
pub fn render_formula_typst(section: &BeamSection) -> String {
    let s = Substitution::from_section(section);
    let k = format_number(STEEL_STRESS_FACTOR);
    format!(
        "A_s = ({m} \"Nmm\") / ({k} dot {fyd} \"MPa\" dot {d} \"mm\" \
         (1 - ({fcd} \"MPa\" dot {b} \"mm\" dot {d} \"mm\") / ({fyd} \"MPa\" dot A_s)))",
        m = s.moment_nmm,
        k = k,
        fyd = s.f_yd,
        fcd = s.f_cd,
        d = s.d,
        b = s.b,
    )
}

/// Format a value with at most four decimals, trailing zeros trimmed.
///
/// `50000000.0 -> "50000000"`, `434.78260869 -> "434.7826"`, `0.87 -> "0.87"`
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{Concrete, MaterialConfig, ReinforcingSteel};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(50.0e6), "50000000");
        assert_eq!(format_number(500.0 / 1.15), "434.7826");
        assert_eq!(format_number(470.0), "470");
        assert_eq!(format_number(0.87), "0.87");
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_latex_default_section() {
        let latex = render_formula_expression(&BeamSection::default());
        assert_eq!(
            latex,
            "A_s = \\frac{50000000 \\, \\text{Nmm}}{0.87 \\cdot 434.7826 \\, \\text{MPa} \\cdot 470 \\, \\text{mm} \\, \
             \\left(1 - \\frac{20 \\, \\text{MPa} \\cdot 300 \\, \\text{mm} \\cdot 470 \\, \\text{mm}}\
             {434.7826 \\, \\text{MPa} \\cdot A_s}\\right)}"
        );
    }

    #[test]
    fn test_latex_braces_balanced() {
        let latex = render_formula_expression(&BeamSection::new(125.5, 250.0, 600.0, 45.0));
        let open = latex.matches('{').count();
        let close = latex.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn test_rendering_uses_section_materials() {
        let section = BeamSection::default()
            .with_materials(MaterialConfig::new(Concrete::new(45.0, 1.5), ReinforcingSteel::new(400.0, 1.0)));
        let latex = render_formula_expression(&section);
        assert!(latex.contains("{30 \\, \\text{MPa}"));
        assert!(latex.contains("0.87 \\cdot 400 \\, \\text{MPa}"));
    }

    #[test]
    fn test_typst_default_section() {
        let typst = render_formula_typst(&BeamSection::default());
        assert!(typst.starts_with("A_s = (50000000 \"Nmm\") / (0.87 dot 434.7826 \"MPa\""));
        assert!(typst.contains("(20 \"MPa\" dot 300 \"mm\" dot 470 \"mm\")"));
        assert_eq!(typst.matches('(').count(), typst.matches(')').count());
    }
}
