use crate::error_formatter;
use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use shunt::Engine;
use std::io::{self, BufRead, IsTerminal};

const QUIT: &str = "q";

/// Evaluate expressions until `q`, prompting on a terminal and reading
/// piped input line by line otherwise
pub fn run_repl(engine: &Engine) -> Result<()> {
    if io::stdin().is_terminal() {
        prompt_loop(engine)
    } else {
        read_loop(engine, io::stdin().lock())
    }
}

fn prompt_loop(engine: &Engine) -> Result<()> {
    println!("Enter an expression, or {} to quit.", QUIT);

    loop {
        let line = match Text::new(">")
            .with_help_message("Example: 2(3+1)^2")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(())
            }
            Err(e) => return Err(e).context("Failed to read expression"),
        };

        if !evaluate_line(engine, &line) {
            return Ok(());
        }
    }
}

fn read_loop(engine: &Engine, input: impl BufRead) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read expression")?;
        if !evaluate_line(engine, &line) {
            break;
        }
    }
    Ok(())
}

/// Print the result or the diagnostic for one line. False once the user quits.
fn evaluate_line(engine: &Engine, line: &str) -> bool {
    let expression = line.trim();
    if expression == QUIT {
        return false;
    }
    if expression.is_empty() {
        return true;
    }

    match engine.calculate(expression) {
        Ok(calculation) => println!("= {}", calculation.result),
        Err(err) => eprintln!("{}", error_formatter::format_error(&err)),
    }
    true
}
