use clap::Parser;
use colored::Colorize;
use dirgenie::cli::{Cli, run_cli};
use dirgenie::config::OrganizeOptions;
use dirgenie::logging;
use dirgenie::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let options = OrganizeOptions::from(Cli::parse());

    if !options.color {
        colored::control::set_override(false);
    }
    if let Err(e) = logging::init_logging(options.verbose, options.color) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let mut output = if options.json {
        OutputFormatter::quiet()
    } else {
        OutputFormatter::new()
    };

    match run_cli(&options, &mut output) {
        Ok(report) => {
            if options.json {
                match report.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{} could not serialize report: {}", "Error:".red().bold(), e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
