//! Property-based tests for the reinforcement solver using proptest.
//!
//! Covers: closed-form agreement with the governing equation, monotonicity
//! in moment and width, determinism, domain rejection and output shape.

use beam_core::calculations::{design, solve, BeamSection};
use beam_core::equations::moment_of_resistance;
use beam_core::materials::{Concrete, MaterialConfig, ReinforcingSteel};
use proptest::prelude::*;

fn section_strategy() -> impl Strategy<Value = BeamSection> {
    (
        0.0f64..2000.0,
        100.0f64..1000.0,
        200.0f64..1500.0,
        10.0f64..100.0,
        20.0f64..90.0,
        250.0f64..600.0,
    )
        .prop_map(|(moment, width, height, cover, f_ck, f_yk)| {
            BeamSection::new(moment, width, height, cover).with_materials(MaterialConfig::new(
                Concrete::new(f_ck, 1.5),
                ReinforcingSteel::new(f_yk, 1.15),
            ))
        })
}

// ============================================================================
// Governing Equation
// ============================================================================

proptest! {
    /// Substituting A_s back into the written equation recovers the moment.
    #[test]
    fn steel_area_satisfies_moment_equation(section in section_strategy()) {
        let result = solve(&section).unwrap();
        let d = result.effective_depth_mm;
        let f_cd = result.design_concrete_strength_mpa;
        let f_yd = result.design_steel_strength_mpa;

        let m_rd = moment_of_resistance(
            result.required_steel_area_mm2,
            f_yd,
            f_cd,
            section.width_mm,
            d,
        );
        let m_ed = section.moment_nmm();
        let scale = m_ed + 0.87 * f_cd * section.width_mm * d * d;

        prop_assert!((m_rd - m_ed).abs() <= 1e-9 * scale, "M_Rd = {}, M_Ed = {}", m_rd, m_ed);
    }

    /// Effective depth is height minus cover.
    #[test]
    fn effective_depth_is_height_minus_cover(section in section_strategy()) {
        let result = solve(&section).unwrap();
        prop_assert_eq!(result.effective_depth_mm, section.height_mm - section.cover_mm);
    }

    /// Steel area is positive for any valid section.
    #[test]
    fn steel_area_is_positive(section in section_strategy()) {
        let result = solve(&section).unwrap();
        prop_assert!(result.required_steel_area_mm2 > 0.0);
    }
}

// ============================================================================
// Monotonicity
// ============================================================================

proptest! {
    /// A larger moment always needs more steel.
    #[test]
    fn steel_area_increases_with_moment(
        section in section_strategy(),
        extra in 1.0f64..500.0,
    ) {
        let mut larger = section;
        larger.moment_knm += extra;

        let a1 = solve(&section).unwrap().required_steel_area_mm2;
        let a2 = solve(&larger).unwrap().required_steel_area_mm2;
        prop_assert!(a2 > a1, "A_s({}) = {} !> A_s({}) = {}", larger.moment_knm, a2, section.moment_knm, a1);
    }

    /// Widening the section raises A_s: the 0.87 f_cd b d² term grows with b.
    #[test]
    fn steel_area_increases_with_width(
        section in section_strategy(),
        extra in 10.0f64..500.0,
    ) {
        let mut wider = section;
        wider.width_mm += extra;

        let a1 = solve(&section).unwrap().required_steel_area_mm2;
        let a2 = solve(&wider).unwrap().required_steel_area_mm2;
        prop_assert!(a2 > a1);
    }
}

// ============================================================================
// Determinism and Domain
// ============================================================================

proptest! {
    /// Identical sections give bit-identical output.
    #[test]
    fn design_is_deterministic(section in section_strategy()) {
        let first = design(&section).unwrap();
        let second = design(&section).unwrap();
        prop_assert_eq!(first.required_steel_area.to_bits(), second.required_steel_area.to_bits());
        prop_assert_eq!(first.result_text, second.result_text);
        prop_assert_eq!(first.formula_expression, second.formula_expression);
    }

    /// Cover at or beyond the section height is rejected without output.
    #[test]
    fn cover_not_less_than_height_is_rejected(
        height in 100.0f64..1000.0,
        excess in 0.0f64..200.0,
    ) {
        let section = BeamSection::new(50.0, 300.0, height, height + excess);
        let err = design(&section).unwrap_err();
        prop_assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    /// Result text is exactly two lines with two-decimal values.
    #[test]
    fn result_text_has_two_lines(section in section_strategy()) {
        let output = design(&section).unwrap();
        let lines: Vec<&str> = output.result_text.lines().collect();

        prop_assert_eq!(lines.len(), 2);
        prop_assert!(lines[0].starts_with("Effective Depth (d): "));
        prop_assert!(lines[0].ends_with(" mm"));
        prop_assert!(lines[1].starts_with("Required Reinforcement Area (A_s): "));
        prop_assert!(lines[1].ends_with(" mm²"));

        let expected = format!("{:.2}", output.required_steel_area);
        prop_assert!(lines[1].contains(&expected));
    }
}
