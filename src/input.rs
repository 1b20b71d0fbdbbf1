/*!
 * Round Count Prompt
 * Interactive input: asks until a valid round count is entered
 */

use crate::core::errors::GameError;
use crate::core::types::GameResult;
use crate::game::Rounds;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "Enter how many Rock Paper Scissors should be played (Min 1 and Max 100): ";
pub const INVALID: &str = "[ERROR] You did not enter a valid number";

/// Prompt on `output` and read lines from `input` until one is a valid
/// round count
///
/// Lines that are not valid UTF-8 are rejected and asked again, like any
/// other invalid entry. Returns `GameError::InputClosed` if input ends first.
pub fn prompt_rounds<R, W>(mut input: R, mut output: W) -> GameResult<Rounds>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        // Undecodable bytes become U+FFFD and fail to parse like any other junk
        match String::from_utf8_lossy(&line).parse::<Rounds>() {
            Ok(rounds) => return Ok(rounds),
            Err(e) => {
                debug!(error = %e, "rejected round count");
                writeln!(output, "{INVALID}")?;
            }
        }
    }
}
