//! # PDF Generation Module
//!
//! Generates PDF reports for a reinforcement calculation using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - The governing formula is typeset natively as Typst math, so no
//!   intermediate image file is produced
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::BeamSection;
//! use beam_core::pdf::{render_section_pdf, ReportInfo};
//!
//! let info = ReportInfo::new("B-1", "Jane Engineer", "25-042");
//! let pdf_bytes = render_section_pdf(&BeamSection::default(), &info).unwrap();
//! std::fs::write("beam_design_calculation.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::{solve, BeamSection, ReinforcementResult};
use crate::equations::registry::{reinforcement_equations, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::formula::render_formula_typst;

// ============================================================================
// Report Metadata
// ============================================================================

/// Header information printed on the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInfo {
    /// Member label (e.g., "B-1")
    pub label: String,
    /// Responsible engineer
    pub engineer: String,
    /// Job/project number
    pub job_id: String,
}

impl Default for ReportInfo {
    fn default() -> Self {
        ReportInfo {
            label: "B-1".to_string(),
            engineer: String::new(),
            job_id: String::new(),
        }
    }
}

impl ReportInfo {
    pub fn new(label: impl Into<String>, engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        ReportInfo {
            label: label.into(),
            engineer: engineer.into(),
            job_id: job_id.into(),
        }
    }
}

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    /// Bundled fonts from typst-assets (text, math and mono faces)
    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the reinforcement calculation report
const SECTION_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 25mm, bottom: 25mm, left: 20mm, right: 20mm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Reinforced Concrete Beam Design]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Job: {{JOB_ID}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

// Title Block
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Reinforced Concrete Beam Design]
    #v(4pt)
    #text(size: 14pt)[{{LABEL}}]
  ]
]

#v(12pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Project Information*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Engineer:], [{{ENGINEER}}],
      [Job ID:], [{{JOB_ID}}],
      [Date:], [{{DATE}}],
    )
  ],
  [
    *Method*
    #v(4pt)
    Singly-reinforced rectangular section, ultimate limit state
  ]
)

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Input Parameters

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
  [Design Moment], [{{MOMENT}}], [kNm],
  [Design Shear Force], [{{SHEAR}}], [kN],
  [Beam Length], [{{LENGTH}}], [m],
  [Width], [{{WIDTH}}], [mm],
  [Height], [{{HEIGHT}}], [mm],
  [Concrete Cover], [{{COVER}}], [mm],
  [Left Support Length], [{{LEFT_SUPPORT}}], [mm],
  [Right Support Length], [{{RIGHT_SUPPORT}}], [mm],
)

#v(12pt)

== Material Properties

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Property*], [*Value*], [*Unit*]),
  [Concrete Compressive Strength ($f_(c k)$)], [{{F_CK}}], [MPa],
  [Partial Safety Factor for Concrete ($gamma_c$)], [{{GAMMA_C}}], [],
  [Yield Strength of Reinforcement ($f_(y k)$)], [{{F_YK}}], [MPa],
  [Partial Safety Factor for Steel ($gamma_s$)], [{{GAMMA_S}}], [],
  [Design Concrete Strength ($f_(c d)$)], [{{F_CD}}], [MPa],
  [Design Steel Strength ($f_(y d)$)], [{{F_YD}}], [MPa],
)

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Results

#block(width: 100%, fill: rgb("#d4edda"), inset: 12pt, radius: 4pt)[
  {{RESULT_TEXT}}
]

#v(12pt)

=== Formula

$ {{FORMULA}} $

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Shear force, beam length and support lengths are recorded for reference only. \
  Calculations should be verified by a qualified structural engineer.
]
"##;

// ============================================================================
// PDF Rendering Functions
// ============================================================================

/// Render a reinforcement calculation to PDF.
///
/// The section is solved first; a section that fails validation produces no
/// document.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::Domain)` - If the section is invalid
/// * `Err(CalcError::Render)` - If Typst compilation or PDF export fails
pub fn render_section_pdf(section: &BeamSection, info: &ReportInfo) -> CalcResult<Vec<u8>> {
    let result = solve(section)?;
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let source = build_report_source(section, &result, info, &date);

    let pdf_bytes = compile_pdf(source)?;
    tracing::info!(label = %info.label, bytes = pdf_bytes.len(), "rendered reinforcement report");
    Ok(pdf_bytes)
}

/// Fill the report template. Pure string work, exposed for inspection.
pub fn build_report_source(
    section: &BeamSection,
    result: &ReinforcementResult,
    info: &ReportInfo,
    date: &str,
) -> String {
    let label = escape_typst(&info.label);
    let mut tracker = EquationTracker::new();
    for equation in reinforcement_equations() {
        tracker.record_for_member(equation, "Tension reinforcement", label.as_str());
    }

    let result_text = result
        .result_text()
        .lines()
        .map(escape_typst)
        .collect::<Vec<_>>()
        .join(" \\\n  ");

    let concrete = &section.materials.concrete;
    let steel = &section.materials.steel;

    let mut source = SECTION_TEMPLATE
        .replace("{{LABEL}}", &label)
        .replace("{{ENGINEER}}", &escape_typst(&info.engineer))
        .replace("{{JOB_ID}}", &escape_typst(&info.job_id))
        .replace("{{DATE}}", date)
        .replace("{{MOMENT}}", &section.moment_knm.to_string())
        .replace("{{SHEAR}}", &section.shear_kn.to_string())
        .replace("{{LENGTH}}", &section.length_m.to_string())
        .replace("{{WIDTH}}", &section.width_mm.to_string())
        .replace("{{HEIGHT}}", &section.height_mm.to_string())
        .replace("{{COVER}}", &section.cover_mm.to_string())
        .replace("{{LEFT_SUPPORT}}", &section.left_support_mm.to_string())
        .replace("{{RIGHT_SUPPORT}}", &section.right_support_mm.to_string())
        .replace("{{F_CK}}", &concrete.f_ck_mpa.to_string())
        .replace("{{GAMMA_C}}", &concrete.gamma_c.to_string())
        .replace("{{F_YK}}", &steel.f_yk_mpa.to_string())
        .replace("{{GAMMA_S}}", &steel.gamma_s.to_string())
        .replace("{{F_CD}}", &format!("{:.2}", result.design_concrete_strength_mpa))
        .replace("{{F_YD}}", &format!("{:.2}", result.design_steel_strength_mpa))
        .replace("{{RESULT_TEXT}}", &result_text)
        .replace("{{FORMULA}}", &render_formula_typst(section));

    source.push_str(&tracker.generate_appendix_typst());
    source
}

/// Compile Typst source and export it as PDF bytes.
fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render("typst compilation", error_msgs.join("; "))
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render("pdf export", error_msgs.join("; "))
    })
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            // `//` and `/*` open comments
            '/' => "\\/".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("A_s #1"), "A\\_s \\#1");
        assert_eq!(escape_typst("B-1 [north]"), "B-1 \\[north\\]");
    }

    #[test]
    fn test_report_source_contains_inputs_and_results() {
        let section = BeamSection::default();
        let result = solve(&section).unwrap();
        let info = ReportInfo::new("B-1", "Test Engineer", "TEST-001");
        let source = build_report_source(&section, &result, &info, "2026-01-01");

        assert!(source.contains("[Design Moment], [50], [kNm]"));
        assert!(source.contains("[Design Shear Force], [20], [kN]"));
        assert!(source.contains("[Partial Safety Factor for Steel ($gamma_s$)], [1.15], []"));
        assert!(source.contains("Required Reinforcement Area (A\\_s): 6767.24 mm²"));
        assert!(source.contains("$ A_s = (50000000 \"Nmm\")"));
        assert!(source.contains("Test Engineer"));
        assert!(source.contains("Appendix: List of Equations"));
        assert!(!source.contains("{{"), "unreplaced placeholder left in template");
    }

    #[test]
    fn test_escape_comment_markers() {
        assert_eq!(escape_typst("J. Smith // checked"), "J. Smith \\/\\/ checked");
        assert_eq!(escape_typst("B-1 /* north */"), "B-1 \\/\\* north \\*\\/");
    }

    #[test]
    fn test_input_values_printed_unrounded() {
        let section = BeamSection::new(50.0, 300.0, 500.0, 0.00001);
        let result = solve(&section).unwrap();
        let source = build_report_source(&section, &result, &ReportInfo::default(), "2026-01-01");

        assert!(source.contains("[Concrete Cover], [0.00001], [mm]"));
    }

    #[test]
    fn test_pdf_with_slashes_in_report_info() {
        let info = ReportInfo::new("B-1 /* north */", "J. Smith // checked", "25/042");
        let pdf = render_section_pdf(&BeamSection::default(), &info);

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        assert!(pdf.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_invalid_section_produces_no_pdf() {
        let section = BeamSection::new(50.0, 300.0, 500.0, 500.0);
        let err = render_section_pdf(&section, &ReportInfo::default()).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_pdf_generation() {
        let info = ReportInfo::new("B-1 Test Beam", "Test Engineer", "TEST-001");
        let pdf = render_section_pdf(&BeamSection::default(), &info);

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }
}
