//! # Equation Registry
//!
//! Central registry of the equations used in reinforced concrete section design.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for PDF generation and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use beam_core::equations::registry::{Equation, EquationTracker};
//!
//! // Track equation usage during calculation
//! let mut tracker = EquationTracker::new();
//! tracker.record_for_member(Equation::RequiredSteelArea, "Tension reinforcement", "B-1");
//!
//! // Get metadata for PDF appendix
//! let meta = Equation::RequiredSteelArea.metadata();
//! println!("Formula: {}", meta.formula_typst);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// EN 1992-1-1 (Eurocode 2) - Design of concrete structures
    Eurocode2 {
        year: u16,
        clause: &'static str,
    },
    /// BS 8110-1 - Structural use of concrete
    BS8110 {
        year: u16,
        clause: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in PDF reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Eurocode2 { year, clause } => {
                format!("EN 1992-1-1:{} Clause {}", year, clause)
            }
            CodeReference::BS8110 { year, clause } => {
                format!("BS 8110-1:{} Clause {}", year, clause)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Eurocode2 { .. } => "EC2",
            CodeReference::BS8110 { .. } => "BS 8110",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the PDF appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Section geometry (effective depth)
    SectionGeometry,
    /// Design strengths from characteristic values
    MaterialStrengths,
    /// Ultimate limit state bending
    Flexure,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionGeometry => "Section Geometry",
            EquationCategory::MaterialStrengths => "Material Strengths",
            EquationCategory::Flexure => "Flexure",
        }
    }

    /// Sort order for PDF appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionGeometry => 1,
            EquationCategory::MaterialStrengths => 2,
            EquationCategory::Flexure => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "d", "f_cd", "A_s")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "MPa", "mm²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a design equation.
///
/// This struct contains everything needed to:
/// - Display the equation in a PDF report
/// - Document its source for audit purposes
/// - Explain its variables and assumptions
/// - Generate markdown documentation for auditability
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Required Tension Reinforcement")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in Typst math notation for PDF rendering
    pub formula_typst: &'static str,
    /// The formula in plain text for markdown (human-readable)
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All design equations used by beam_core.
///
/// Each variant maps to a specific formula with full metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// d = h - c
    EffectiveDepth,
    /// f_cd = f_ck / gamma_c
    DesignConcreteStrength,
    /// f_yd = f_yk / gamma_s
    DesignSteelStrength,
    /// M = 0.87 f_yd d A_s (1 - f_cd b d / (f_yd A_s))
    MomentOfResistance,
    /// A_s = (M + 0.87 f_cd b d^2) / (0.87 f_yd d)
    RequiredSteelArea,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                description: "Distance from the compression face to the centroid of tension reinforcement",
                formula_typst: r#"$d = h - c$"#,
                formula_plain: "d = h - c",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("h", "Total section depth", "mm"),
                    Variable::new("c", "Cover to reinforcement centroid", "mm"),
                ],
                assumptions: vec!["Single layer of tension reinforcement"],
                category: EquationCategory::SectionGeometry,
                source_module: "equations/flexure.rs",
                source_function: "effective_depth",
            },

            Equation::DesignConcreteStrength => EquationMetadata {
                name: "Design Concrete Strength",
                description: "Characteristic compressive strength reduced by the concrete partial factor",
                formula_typst: r#"$f_(c d) = f_(c k) / gamma_c$"#,
                formula_plain: "f_cd = f_ck / gamma_c",
                reference: CodeReference::Eurocode2 { year: 2004, clause: "3.1.6" },
                variables: vec![
                    Variable::new("f_(c d)", "Design compressive strength", "MPa"),
                    Variable::new("f_(c k)", "Characteristic compressive strength", "MPa"),
                    Variable::new("gamma_c", "Partial safety factor for concrete", "-"),
                ],
                assumptions: vec!["Long-term coefficient on concrete strength taken as 1.0"],
                category: EquationCategory::MaterialStrengths,
                source_module: "equations/flexure.rs",
                source_function: "design_strength",
            },

            Equation::DesignSteelStrength => EquationMetadata {
                name: "Design Steel Strength",
                description: "Characteristic yield strength reduced by the steel partial factor",
                formula_typst: r#"$f_(y d) = f_(y k) / gamma_s$"#,
                formula_plain: "f_yd = f_yk / gamma_s",
                reference: CodeReference::Eurocode2 { year: 2004, clause: "3.2.7" },
                variables: vec![
                    Variable::new("f_(y d)", "Design yield strength", "MPa"),
                    Variable::new("f_(y k)", "Characteristic yield strength", "MPa"),
                    Variable::new("gamma_s", "Partial safety factor for steel", "-"),
                ],
                assumptions: vec!["Reinforcement yields at the ultimate limit state"],
                category: EquationCategory::MaterialStrengths,
                source_module: "equations/flexure.rs",
                source_function: "design_strength",
            },

            Equation::MomentOfResistance => EquationMetadata {
                name: "Ultimate Moment of Resistance",
                description: "Moment capacity of a singly-reinforced rectangular section for a given steel area",
                formula_typst: r#"$M dot 10^6 = 0.87 f_(y d) d A_s (1 - (f_(c d) b d) / (f_(y d) A_s))$"#,
                formula_plain: "M * 10^6 = 0.87 * f_yd * d * A_s * (1 - (f_cd * b * d) / (f_yd * A_s))",
                reference: CodeReference::BS8110 { year: 1997, clause: "3.4.4.4" },
                variables: vec![
                    Variable::new("M", "Design bending moment", "kNm"),
                    Variable::new("b", "Section width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("A_s", "Tension reinforcement area", "mm²"),
                ],
                assumptions: vec![
                    "Singly-reinforced rectangular section",
                    "Ultimate limit state",
                ],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "moment_of_resistance",
            },

            Equation::RequiredSteelArea => EquationMetadata {
                name: "Required Tension Reinforcement",
                description: "Closed-form root of the moment of resistance equation for the steel area",
                formula_typst: r#"$A_s = (M dot 10^6 + 0.87 f_(c d) b d^2) / (0.87 f_(y d) d)$"#,
                formula_plain: "A_s = (M * 10^6 + 0.87 * f_cd * b * d^2) / (0.87 * f_yd * d)",
                reference: CodeReference::BS8110 { year: 1997, clause: "3.4.4.4" },
                variables: vec![
                    Variable::new("A_s", "Required tension reinforcement area", "mm²"),
                    Variable::new("M", "Design bending moment", "kNm"),
                    Variable::new("f_(c d)", "Design compressive strength", "MPa"),
                    Variable::new("f_(y d)", "Design yield strength", "MPa"),
                ],
                assumptions: vec![
                    "The steel area inside the bracket cancels, so the root is unique",
                    "No minimum or maximum steel ratio check",
                ],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "required_steel_area",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![SectionGeometry, MaterialStrengths, Flexure];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::EffectiveDepth,
    Equation::DesignConcreteStrength,
    Equation::DesignSteelStrength,
    Equation::MomentOfResistance,
    Equation::RequiredSteelArea,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used
    pub context: String,
    /// The member label this equation was applied to
    pub member_label: Option<String>,
}

impl EquationUsage {
    /// Create usage record with member label
    pub fn for_member(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record equation usage for a specific member
    pub fn record_for_member(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation for appendix generation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category for appendix
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Typst Appendix Generation
// ============================================================================

impl EquationTracker {
    /// Generate Typst markup for the "List of Equations" appendix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record_for_member(Equation::RequiredSteelArea, "Reinforcement", "B-1");
    ///
    /// let typst = tracker.generate_appendix_typst();
    /// assert!(typst.contains("Required Tension Reinforcement"));
    /// ```
    pub fn generate_appendix_typst(&self) -> String {
        let mut output = String::new();

        output.push_str(r##"
#pagebreak()

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Appendix: List of Equations]
  ]
]

#v(12pt)

#text(size: 10pt)[
  This appendix lists the design equations used in this calculation.
  Each equation includes its formula, code reference, and the members to which it was applied.
]

#v(16pt)
"##);

        let by_category = self.by_category();

        if by_category.is_empty() {
            output.push_str("#text(style: \"italic\")[No equations recorded for this calculation.]\n");
            return output;
        }

        let usage_by_eq = self.by_equation();

        for (category, equations) in by_category {
            output.push_str(&format!("\n== {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();

                output.push_str(&format!("=== {}\n\n", meta.name));
                output.push_str(&format!("#text(size: 10pt)[{}]\n\n", meta.description));
                output.push_str(&format!("*Formula:* {}\n\n", meta.formula_typst));
                output.push_str(&format!("*Reference:* {}\n\n", meta.reference.citation()));

                if !meta.variables.is_empty() {
                    output.push_str("*Variables:*\n");
                    output.push_str("#table(\n");
                    output.push_str("  columns: (auto, 1fr, auto),\n");
                    output.push_str("  inset: 6pt,\n");
                    output.push_str("  stroke: 0.5pt,\n");
                    output.push_str("  align: (left, left, left),\n");
                    output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");

                    for var in &meta.variables {
                        output.push_str(&format!(
                            "  [${}$], [{}], [{}],\n",
                            escape_typst_math(var.symbol),
                            var.description,
                            var.units
                        ));
                    }
                    output.push_str(")\n\n");
                }

                if let Some(usages) = usage_by_eq.get(&equation) {
                    let mut labels: Vec<&str> = usages
                        .iter()
                        .filter_map(|u| u.member_label.as_deref())
                        .collect();
                    labels.sort();
                    labels.dedup();

                    if !labels.is_empty() {
                        output.push_str(&format!("*Applied to:* {}\n\n", labels.join(", ")));
                    }
                }

                if !meta.assumptions.is_empty() {
                    output.push_str("*Assumptions:*\n");
                    for assumption in &meta.assumptions {
                        output.push_str(&format!("- {}\n", assumption));
                    }
                    output.push('\n');
                }

                output.push_str("#v(8pt)\n");
                output.push_str("#line(length: 100%, stroke: 0.25pt + gray)\n");
                output.push_str("#v(8pt)\n\n");
            }
        }

        output
    }
}

/// Get the equations applied when sizing tension reinforcement, in
/// calculation order.
pub fn reinforcement_equations() -> Vec<Equation> {
    vec![
        Equation::EffectiveDepth,
        Equation::DesignConcreteStrength,
        Equation::DesignSteelStrength,
        Equation::MomentOfResistance,
        Equation::RequiredSteelArea,
    ]
}

/// Escape special characters for Typst math mode
fn escape_typst_math(s: &str) -> String {
    // Underscores stay: in math mode they create the subscripts we want
    s.replace('\\', "\\\\")
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// # Example
///
/// ```rust
/// use beam_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Beam Design Equations Reference"));
/// assert!(markdown.contains("Flexure"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Beam Design Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used in the reinforcement calculation.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Section dimensions | mm |
| Strengths | MPa (N/mm²) |
| Design moment | kNm (converted to Nmm internally) |
| Steel area | mm² |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 5);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_typst.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let root = Equation::RequiredSteelArea.metadata();
        assert!(root.formula_plain.contains("0.87 * f_cd * b * d^2"));
    }

    #[test]
    fn test_code_reference_citation() {
        let ec2 = CodeReference::Eurocode2 { year: 2004, clause: "3.1.6" };
        assert_eq!(ec2.citation(), "EN 1992-1-1:2004 Clause 3.1.6");
        assert_eq!(ec2.short_form(), "EC2");

        let bs = CodeReference::BS8110 { year: 1997, clause: "3.4.4.4" };
        assert_eq!(bs.citation(), "BS 8110-1:1997 Clause 3.4.4.4");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_member(Equation::EffectiveDepth, "Reinforcement", "B-1");
        tracker.record_for_member(Equation::RequiredSteelArea, "Reinforcement", "B-1");
        tracker.record_for_member(Equation::EffectiveDepth, "Reinforcement", "B-2");

        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::EffectiveDepth, Equation::RequiredSteelArea]
        );
        assert_eq!(tracker.by_equation()[&Equation::EffectiveDepth].len(), 2);
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_member(Equation::RequiredSteelArea, "test", "B-1");
        tracker.record_for_member(Equation::DesignSteelStrength, "test", "B-1");
        tracker.record_for_member(Equation::EffectiveDepth, "test", "B-1");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![
                EquationCategory::SectionGeometry,
                EquationCategory::MaterialStrengths,
                EquationCategory::Flexure,
            ]
        );
    }

    #[test]
    fn test_generate_appendix_typst() {
        let mut tracker = EquationTracker::new();
        for eq in reinforcement_equations() {
            tracker.record_for_member(eq, "Reinforcement", "B-1");
        }

        let typst = tracker.generate_appendix_typst();
        assert!(typst.contains("Appendix: List of Equations"));
        assert!(typst.contains("Effective Depth"));
        assert!(typst.contains("Ultimate Moment of Resistance"));
        assert!(typst.contains("EN 1992-1-1"));
        assert!(typst.contains("*Applied to:* B-1"));
    }

    #[test]
    fn test_generate_appendix_empty_tracker() {
        let typst = EquationTracker::new().generate_appendix_typst();
        assert!(typst.contains("No equations recorded"));
    }

    #[test]
    fn test_committed_equations_markdown_is_current() {
        assert_eq!(
            include_str!("EQUATIONS.md"),
            generate_equations_markdown(),
            "EQUATIONS.md is stale; run `cargo run --bin gen-equations`"
        );
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Section Geometry"));
        assert!(markdown.contains("## Material Strengths"));
        assert!(markdown.contains("## Flexure"));
        assert!(markdown.contains("`d = h - c`"));
        assert!(markdown.contains("equations/flexure.rs"));
        assert!(markdown.contains("**Total Equations:** 5"));
        assert!(markdown.contains("**Categories:** 3"));
    }
}
