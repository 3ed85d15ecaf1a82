use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::Hangman;

pub const PROMPT: &str = "Pick a letter: ";
pub const RETRY: &str = "Pick exactly one new letter please";

/// How a round handed to [`play`] came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    /// Input ran out before the word was revealed.
    Abandoned,
}

/// Plays `game` to completion, reading guesses from `input` and writing the
/// board, prompts and complaints to `output`.
pub fn play<R, W>(game: &mut Hangman, mut input: R, mut output: W) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        writeln!(output, "{}", game.current_guess())?;
        writeln!(output, "{}", game.discards())?;
        if game.is_solved() {
            return Ok(Outcome::Solved);
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Abandoned);
        }

        match accept_letter(game, strip_newline(&line)) {
            Some(letter) => game.guess_letter(letter),
            None => writeln!(output, "{RETRY}")?,
        }
    }
}

fn accept_letter(game: &Hangman, input: &str) -> Option<char> {
    let letter = input.chars().next().filter(|_| Hangman::is_valid_letter(input));
    match letter {
        Some(letter) if !game.is_already_guessed(letter) => Some(letter),
        _ => {
            debug!(?input, "rejected guess");
            None
        }
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
