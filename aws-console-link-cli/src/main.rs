//! Command-line adapter for the aws-console-link library.
//!
//! Accepts ARNs as arguments, or one per line on stdin when no
//! arguments are given. Each input is handled independently: a link on
//! stdout on success, the error on stderr otherwise, and processing
//! always continues with the next input.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use aws_console_link::Arn;

#[derive(Parser)]
#[command(
    name = "aws-console-link",
    version,
    about = "Print AWS console links for ARNs",
    long_about = "Print a direct AWS web console link for each ARN given as an \
                  argument, or for each line read from stdin when no arguments \
                  are given."
)]
struct Cli {
    /// ARNs to resolve
    #[arg(value_name = "ARN")]
    arns: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let inputs = if cli.arns.is_empty() {
        read_stdin_lines()?
    } else {
        cli.arns
    };

    for input in &inputs {
        resolve_one(input);
    }

    Ok(())
}

/// One line per ARN; blank lines are skipped so piped output with
/// trailing newlines works as expected.
fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn resolve_one(input: &str) {
    log::debug!("resolving {input}");
    match Arn::parse(input).and_then(|arn| arn.console_link()) {
        Ok(link) => println!("{link}"),
        Err(err) => eprintln!("{input}: {err}"),
    }
}
