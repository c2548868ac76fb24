//! Interactive startup prompts
//!
//! Written against `BufRead`/`Write` so the prompt loops are unit-testable.
//! Invalid entries re-prompt locally; only a closed stream is an error.

use reaction_physics::Mode;
use std::io::{self, BufRead, Write};

fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt for the population mode until a valid one is entered.
pub fn read_mode(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Mode> {
    writeln!(
        output,
        "Would you like to simulate element interactions, fundamental particle interactions, or a combination of both?"
    )?;
    write!(output, "Enter either ELEMENT, PARTICLE, or BOTH: ")?;
    output.flush()?;

    loop {
        match read_trimmed_line(input)?.parse::<Mode>() {
            Ok(mode) => return Ok(mode),
            Err(_) => {
                write!(output, "Invalid response. Enter either ELEMENT, PARTICLE, or BOTH: ")?;
                output.flush()?;
            }
        }
    }
}

/// Prompt for the particle count until a positive integer is entered.
pub fn read_count(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<usize> {
    write!(output, "How many particles would you like to simulate? ")?;
    output.flush()?;

    loop {
        match read_trimmed_line(input)?.parse::<usize>() {
            Ok(count) if count > 0 => return Ok(count),
            _ => {
                write!(output, "Please enter a positive number: ")?;
                output.flush()?;
            }
        }
    }
}
