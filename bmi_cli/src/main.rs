//! # BMI Calculator CLI
//!
//! Prompts for age, height and weight, then prints the BMI, its category
//! and the advisory text, followed by the JSON form of the result.
//!
//! ## Usage
//!
//! ```text
//! bmi_cli [--history <path>] [--json]
//! ```
//!
//! - `--history <path>`: append the reading to a history file
//! - `--json`: print only the JSON result
//!
//! Prompts are written to stderr, so stdout carries only the report (or,
//! with `--json`, only the JSON document).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bmi_core::file_io::{load_or_default, save_history};
use bmi_core::reference::{row_for, CATEGORY_TABLE};
use bmi_core::units::{HeightUnit, WeightUnit};
use bmi_core::{calculate, BmiRecord, BmiResult, CalcError, CalcResult, Measurement, MeasurementForm};

const USAGE: &str = "Usage: bmi_cli [--history <path>] [--json]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    history: Option<PathBuf>,
    json_only: bool,
}

/// Parse command line arguments, not including the program name.
fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json_only = true,
            "--history" => {
                let path = iter.next().ok_or("--history needs a path")?;
                args.history = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(args)
}

/// Where the CLI reads answers from and writes its output and prompts to.
struct Console<R, W, P> {
    input: R,
    out: W,
    prompts: P,
}

impl<R: BufRead, W: Write, P: Write> Console<R, W, P> {
    /// Ask a question; an empty answer, end of input or a broken prompt
    /// stream all fall back to `default`.
    fn prompt(&mut self, prompt: &str, default: &str) -> String {
        if write!(self.prompts, "{}", prompt).and_then(|_| self.prompts.flush()).is_err() {
            return default.to_string();
        }

        let mut input = String::new();
        if self.input.read_line(&mut input).is_err() {
            return default.to_string();
        }

        let input = input.trim();
        if input.is_empty() {
            default.to_string()
        } else {
            input.to_string()
        }
    }

    fn read_form(&mut self, default_height: HeightUnit, default_weight: WeightUnit) -> CalcResult<MeasurementForm> {
        let age = self.prompt("Enter age (years) [30]: ", "30");
        let height_unit: HeightUnit = self
            .prompt(
                &format!("Height unit, cm or ft [{}]: ", default_height.code()),
                default_height.code(),
            )
            .parse()?;
        let height = self.prompt(&format!("Enter height ({}): ", height_unit.code()), "");
        let weight_unit: WeightUnit = self
            .prompt(
                &format!("Weight unit, kg or lbs [{}]: ", default_weight.code()),
                default_weight.code(),
            )
            .parse()?;
        let weight = self.prompt(&format!("Enter weight ({}): ", weight_unit.code()), "");

        Ok(MeasurementForm {
            age,
            height,
            height_unit,
            weight,
            weight_unit,
        })
    }
}

fn stdout_error(e: io::Error) -> CalcError {
    CalcError::file_error("write", "stdout", e.to_string())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console {
        input: io::stdin().lock(),
        out: io::stdout().lock(),
        prompts: io::stderr(),
    };

    match run(&args, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write, P: Write>(args: &Args, console: &mut Console<R, W, P>) -> CalcResult<()> {
    let mut history = match &args.history {
        Some(path) => Some(load_or_default(path)?),
        None => None,
    };
    let prefs = history.as_ref().map(|h| h.settings).unwrap_or_default();

    if !args.json_only {
        writeln!(console.out, "BMI Calculator\n==============\n").map_err(stdout_error)?;
    }

    let form = console.read_form(prefs.default_height_unit, prefs.default_weight_unit)?;
    let measurement = form.parse().inspect_err(|e| log::warn!("rejected input: {}", e))?;
    let result = calculate(&measurement)?;

    if args.json_only {
        let json = serde_json::to_string_pretty(&result)?;
        writeln!(console.out, "{}", json).map_err(stdout_error)?;
    } else {
        write_report(&mut console.out, &measurement, &result)?;
    }

    if let (Some(history), Some(path)) = (history.as_mut(), &args.history) {
        let record = BmiRecord::from_calculation(&measurement, &result, history.user_id());
        history.add_record(record);
        save_history(history, path)?;
        if !args.json_only {
            writeln!(console.out, "\nSaved to {} ({} readings)", path.display(), history.record_count())
                .map_err(stdout_error)?;
        }
    }

    Ok(())
}

fn write_report(out: &mut impl Write, measurement: &Measurement, result: &BmiResult) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(result)?;

    let mut lines = vec![
        String::new(),
        "═══════════════════════════════════════".to_string(),
        "  BMI RESULT".to_string(),
        "═══════════════════════════════════════".to_string(),
        String::new(),
        "Input:".to_string(),
        format!("  Age:      {} years", measurement.age),
        format!(
            "  Height:   {} ({:.3} m)",
            measurement.height_label(),
            measurement.height_meters().value()
        ),
        format!(
            "  Weight:   {} ({:.2} kg)",
            measurement.weight_label(),
            measurement.weight_kilograms().value()
        ),
        String::new(),
        format!("  BMI:      {}", result.display_value()),
        format!("  Category: {} ({})", result.category, row_for(result.category).range_label),
        String::new(),
        format!("  {}", result.advisory),
        String::new(),
        "Reference:".to_string(),
    ];
    for row in &CATEGORY_TABLE {
        let marker = if row.category == result.category { ">" } else { " " };
        lines.push(format!("  {} {:<14} {}", marker, row.category.display_name(), row.range_label));
    }
    lines.push("═══════════════════════════════════════".to_string());
    lines.push(String::new());
    lines.push("JSON Output:".to_string());
    lines.push(json);

    for line in lines {
        writeln!(out, "{}", line).map_err(stdout_error)?;
    }
    Ok(())
}
