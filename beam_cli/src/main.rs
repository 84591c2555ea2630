//! # beam_cli
//!
//! Terminal front end for tension reinforcement design.
//!
//! ## Usage
//!
//! ```bash
//! beam_cli                         # prompt for each value
//! beam_cli --defaults --pdf        # default section, write beam_design_calculation.pdf
//! beam_cli --input b1.json --json  # print the output contract as JSON
//! ```

mod input;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;

use beam_core::calculations::{design, BeamSection, ReinforcementOutput};
use beam_core::errors::CalcError;
use beam_core::file_io::{load_section, write_report};
use beam_core::pdf::{render_section_pdf, ReportInfo};
use serde::Serialize;
use thiserror::Error;

use crate::input::{prompt_section, InputFormatError, PromptError};

const DEFAULT_PDF_PATH: &str = "beam_design_calculation.pdf";

/// Top-level failure, printed as JSON on stderr.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
enum CliError {
    #[error("{message}")]
    Usage { message: String },

    #[error(transparent)]
    InputFormat(InputFormatError),

    #[error("{operation} failed: {reason}")]
    Io { operation: String, reason: String },

    #[error(transparent)]
    Calc(CalcError),
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        CliError::Usage { message: message.into() }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CliError::Usage { .. } => "USAGE_ERROR",
            CliError::InputFormat(_) => "INPUT_FORMAT_ERROR",
            CliError::Io { .. } => "IO_ERROR",
            CliError::Calc(e) => e.error_code(),
        }
    }
}

impl From<CalcError> for CliError {
    fn from(e: CalcError) -> Self {
        CliError::Calc(e)
    }
}

impl From<PromptError> for CliError {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::Format(e) => CliError::InputFormat(e),
            PromptError::Io(e) => CliError::Io {
                operation: "prompt".to_string(),
                reason: e.to_string(),
            },
        }
    }
}

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct Args {
    defaults: bool,
    input: Option<PathBuf>,
    pdf: Option<PathBuf>,
    json: bool,
    info: ReportInfo,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args, CliError> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--defaults" => parsed.defaults = true,
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            "--input" => {
                parsed.input = Some(PathBuf::from(value_for(args, i, "--input")?));
                i += 1;
            }
            "--pdf" => {
                // Path is optional
                match args.get(i + 1) {
                    Some(next) if !next.starts_with("--") => {
                        parsed.pdf = Some(PathBuf::from(next));
                        i += 1;
                    }
                    _ => parsed.pdf = Some(PathBuf::from(DEFAULT_PDF_PATH)),
                }
            }
            "--engineer" => {
                parsed.info.engineer = value_for(args, i, "--engineer")?.to_string();
                i += 1;
            }
            "--job" => {
                parsed.info.job_id = value_for(args, i, "--job")?.to_string();
                i += 1;
            }
            "--label" => {
                parsed.info.label = value_for(args, i, "--label")?.to_string();
                i += 1;
            }
            other => return Err(CliError::usage(format!("Unknown option: {}", other))),
        }
        i += 1;
    }

    if parsed.defaults && parsed.input.is_some() {
        return Err(CliError::usage("--defaults and --input cannot be combined"));
    }

    Ok(parsed)
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i + 1)
        .map(String::as_str)
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| CliError::usage(format!("{} requires a value", flag)))
}

fn print_usage() {
    println!("beam_cli - Tension reinforcement for a singly-reinforced concrete beam");
    println!();
    println!("Usage: beam_cli [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --defaults          Use the default section without prompting");
    println!("  --input <file>      Read the section from a JSON file");
    println!("  --pdf [path]        Export a PDF report (default: {})", DEFAULT_PDF_PATH);
    println!("  --json              Print the result as JSON");
    println!("  --engineer <name>   Engineer shown on the report");
    println!("  --job <id>          Job number shown on the report");
    println!("  --label <label>     Member label shown on the report (default: B-1)");
    println!("  -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG=debug for solver tracing.");
}

fn print_inputs(section: &BeamSection) {
    let concrete = &section.materials.concrete;
    let steel = &section.materials.steel;

    println!("Input:");
    println!("  Design moment:        {} kNm", section.moment_knm);
    println!("  Design shear force:   {} kN", section.shear_kn);
    println!("  Beam length:          {} m", section.length_m);
    println!("  Width:                {} mm", section.width_mm);
    println!("  Height:               {} mm", section.height_mm);
    println!("  Concrete cover:       {} mm", section.cover_mm);
    println!("  Left support length:  {} mm", section.left_support_mm);
    println!("  Right support length: {} mm", section.right_support_mm);
    println!("  f_ck = {} MPa, gamma_c = {}", concrete.f_ck_mpa, concrete.gamma_c);
    println!("  f_yk = {} MPa, gamma_s = {}", steel.f_yk_mpa, steel.gamma_s);
}

fn print_output(output: &ReinforcementOutput) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  REINFORCEMENT RESULTS");
    println!("═══════════════════════════════════════");
    println!("{}", output.result_text);
    println!();
    println!("Formula:");
    println!("  {}", output.formula_expression);
}

fn run(args: &Args) -> Result<(), CliError> {
    let section = if let Some(path) = &args.input {
        load_section(path)?
    } else if args.defaults {
        BeamSection::default()
    } else {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prompt_section(&mut stdin.lock(), &mut stdout)?
    };

    let output = design(&section)?;

    if args.json {
        let json = serde_json::to_string_pretty(&output).map_err(|e| {
            CliError::Calc(CalcError::SerializationError { reason: e.to_string() })
        })?;
        println!("{}", json);
    } else {
        println!();
        print_inputs(&section);
        print_output(&output);
    }

    if let Some(path) = &args.pdf {
        let pdf_bytes = render_section_pdf(&section, &args.info)?;
        write_report(path, &pdf_bytes)?;
        if !args.json {
            println!();
            println!("PDF report written to {}", path.display());
        }
    }

    Ok(())
}

fn report_error(e: &CliError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
}

fn main() {
    logging::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            report_error(&e);
            print_usage();
            std::process::exit(2);
        }
    };

    if args.help {
        print_usage();
        return;
    }

    if let Err(e) = run(&args) {
        let _ = io::stdout().flush();
        tracing::debug!(code = e.error_code(), "calculation aborted");
        report_error(&e);
        std::process::exit(1);
    }
}
