use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use rulesmith::generator::render_rule_set;
use rulesmith::utils::file::{load_rule_set, save_rule_set};
use rulesmith::utils::ident::UuidIdProvider;
use rulesmith::validator::validate_rule;
use rulesmith::RuleSet;

/// A utility to synthesize and validate YARA detection rules from a structured rule model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a rule set document (JSON)
    #[arg(value_name = "RULESET")]
    input: Option<String>,

    /// Output file path for the rendered rule file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Validate the rule set and exit without rendering
    #[arg(long)]
    check: bool,

    /// Write a rule set document with a single default rule and exit
    #[arg(long, value_name = "FILE")]
    init: Option<String>,
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    // Scaffold a fresh rule set document if requested
    if let Some(path) = args.init {
        let mut ids = UuidIdProvider;
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let rule_set = RuleSet::new(&mut ids, &date);
        return match save_rule_set(&path, &rule_set) {
            Ok(()) => {
                info!("Wrote new rule set document to {}", path);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to write rule set document: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let input = match args.input {
        Some(input) => input,
        None => {
            eprintln!("Error: a rule set document is required unless --init is used");
            return ExitCode::FAILURE;
        }
    };

    let rule_set = match load_rule_set(&input) {
        Ok(rule_set) => rule_set,
        Err(e) => {
            error!("Failed to load rule set from {}: {}", input, e);
            return ExitCode::FAILURE;
        }
    };

    // Report validation problems for every rule; rendering proceeds
    // regardless unless --check was given.
    let mut invalid = 0;
    for (index, rule) in rule_set.rules.iter().enumerate() {
        let report = validate_rule(rule);
        if !report.is_valid {
            invalid += 1;
            for message in &report.errors {
                eprintln!("rule {}: {}", index + 1, message);
            }
        }
    }

    if args.check {
        return if invalid == 0 {
            info!("All {} rule(s) valid", rule_set.rules.len());
            ExitCode::SUCCESS
        } else {
            error!("{} rule(s) failed validation", invalid);
            ExitCode::FAILURE
        };
    }

    let text = render_rule_set(&rule_set);
    match args.output {
        Some(output_file) => match std::fs::write(&output_file, &text) {
            Ok(()) => {
                info!("Successfully wrote rule file to {}", output_file);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to write to output file: {}", e);
                ExitCode::FAILURE
            }
        },
        None => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
    }
}
