// HL7 OBX CLI
//
// Command-line interface for extracting and validating OBX subsegments
// from HL7 v2 message files.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use obx_core::model::{ObxField, ObxResults};
use obx_core::{parse, report, validate};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hl7-obx")]
#[command(about = "Command-line interface for HL7 OBX subsegment extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract OBX producer and process identifiers from a message file
    Check {
        /// Path to the HL7 message file
        message: PathBuf,

        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },

    /// Check that required OBX fields are present in a message file
    Validate {
        /// Path to the HL7 message file
        message: PathBuf,

        /// Required field keys (defaults to OBX.15.1, OBX.15.2 and OBX.23.1)
        #[arg(short, long, value_name = "KEY")]
        require: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { message, format } => run_check(message, format),
        Commands::Validate { message, require } => run_validate(message, require),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "hl7-obx", &mut io::stdout());
            Ok(())
        }
    }
}

/// Parses the message file and prints the collected OBX values
fn run_check(path: &Path, format: &str) -> Result<()> {
    let results = parse_file(path)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&results.to_json())?),
        _ => {
            println!("{} {}", "Message:".green().bold(), path.display());
            print!("{}", report(&results));
        }
    }

    Ok(())
}

/// Parses the message file and checks the required fields for presence
fn run_validate(path: &Path, require: &[String]) -> Result<()> {
    let results = parse_file(path)?;
    let required = parse_required(require)?;
    let summary = validate(&results, required.as_deref());

    println!("{} {}", "Validating:".green().bold(), path.display());

    let required_fields: &[ObxField] = match &required {
        Some(fields) => fields,
        None => &ObxField::ALL,
    };

    for field in required_fields {
        if results.has_values(*field) {
            println!("{}: {}", field.key(), "Present".green());
        } else {
            println!("{}: {}", field.key(), "Missing".red());
        }
    }

    let verdict = if summary.is_valid {
        "Valid".green().bold()
    } else {
        "Invalid".red().bold()
    };
    println!(
        "{} {} ({} of {} required fields present)",
        "Result:".bold(),
        verdict,
        summary.total_present,
        summary.total_required
    );

    Ok(())
}

/// Resolves `--require` keys into OBX fields, rejecting unknown keys
fn parse_required(keys: &[String]) -> Result<Option<Vec<ObxField>>> {
    if keys.is_empty() {
        return Ok(None);
    }

    let mut fields = Vec::with_capacity(keys.len());
    for key in keys {
        match ObxField::from_key(key) {
            Some(field) => fields.push(field),
            None => bail!(
                "unknown OBX field key '{}'; expected one of OBX.15.1, OBX.15.2, OBX.23.1",
                key
            ),
        }
    }

    Ok(Some(fields))
}

/// Reads and parses an HL7 message file
fn parse_file(path: &Path) -> Result<ObxResults> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read message file: {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse HL7 message: {}", path.display()))
}
