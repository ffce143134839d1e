//! Command-line front end for the toolkit operations.
//!
//! Each subcommand runs one operation and prints the same JSON body the HTTP
//! service would return. Failures go to stderr with a stable exit code.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use toolkit::error::ToolkitError;
use toolkit::types::{
    ArithmeticRequest, FactorialRequest, InterestRequest, PalindromeRequest, TemperatureRequest,
    parse_saturating_i64,
};
use toolkit::{exit_codes, handlers, logging};

#[derive(Parser)]
#[command(
    name = "toolkit",
    version,
    about = "Stateless arithmetic and conversion utilities"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply `add`, `sub`, `mul` or `div` (or `+ - * /`) to two numbers.
    Calculate {
        #[arg(allow_negative_numbers = true)]
        num1: f64,
        #[arg(allow_negative_numbers = true)]
        num2: f64,
        operation: String,
    },
    /// Convert a temperature between Celsius, Fahrenheit and Kelvin.
    Temperature {
        #[arg(long = "from")]
        from_unit: String,
        #[arg(long = "to")]
        to_unit: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Compute the factorial of an integer between 0 and 20.
    Factorial {
        #[arg(allow_negative_numbers = true, value_parser = parse_saturating_i64)]
        num: i64,
    },
    /// Compute simple interest (`principal * rate * time / 100`).
    Interest {
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        #[arg(allow_negative_numbers = true)]
        time: i64,
    },
    /// Check whether text reads the same backwards (case-sensitive).
    Palindrome { text: String },
}

fn main() {
    logging::init("warn");
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap exits with 2 on usage errors, which is taken by DOMAIN here.
            let _ = err.print();
            std::process::exit(if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            });
        }
    };
    let code = match run(cli.command) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{err:#}");
            err.downcast_ref::<ToolkitError>()
                .map_or(exit_codes::INVALID, |e| exit_codes::for_kind(e.kind()))
        }
    };
    std::process::exit(code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Calculate {
            num1,
            num2,
            operation,
        } => print_json(&handlers::calculate(&ArithmeticRequest {
            num1,
            num2,
            operation,
        })?),
        Command::Temperature {
            from_unit,
            to_unit,
            value,
        } => print_json(&handlers::temperature(&TemperatureRequest {
            from_unit,
            to_unit,
            value,
        })?),
        Command::Factorial { num } => print_json(&handlers::factorial(&FactorialRequest { num })?),
        Command::Interest {
            principal,
            rate,
            time,
        } => print_json(&handlers::interest(&InterestRequest {
            principal,
            rate,
            time,
        })?),
        Command::Palindrome { text } => {
            print_json(&handlers::palindrome(&PalindromeRequest { text }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string(value).context("serialize result")?;
    println!("{payload}");
    Ok(())
}
