//! Core of a single-player hangman game.
//!
//! [`Hangman`] tracks one round, [`WordList`] supplies the candidate words and
//! [`play`] runs a round over any reader/writer pair.

mod error;
mod game;
mod play;
mod words;

pub use error::{Error, Result};
pub use game::{Hangman, PLACEHOLDER};
pub use play::{play, Outcome, PROMPT, RETRY};
pub use words::WordList;
