use hashbrown::HashSet;
use rand::Rng;
use squirrel_rng::SquirrelRng;
use tracing::{debug, trace};

use crate::WordList;

pub const PLACEHOLDER: char = '_';

/// State for a single round: the secret word and every letter guessed so far.
///
/// The engine never validates what it is given. Callers are expected to gate
/// [`Hangman::guess_letter`] on [`Hangman::is_valid_letter`] and
/// [`Hangman::is_already_guessed`]; anything else that gets through is simply
/// recorded and, unless it occurs in the word, reported as a discard.
#[derive(Clone, Debug)]
pub struct Hangman {
    secret: String,
    picked: HashSet<char>,
}

impl Hangman {
    pub fn new(words: &WordList) -> Self {
        Self::with_rng(words, &mut SquirrelRng::new())
    }

    pub fn with_rng<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let secret = words.choose(rng);
        debug!(len = secret.chars().count(), "picked secret word");
        Self::with_secret(secret)
    }

    pub fn with_default_words() -> Self {
        Self::new(&WordList::embedded())
    }

    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            picked: HashSet::new(),
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    /// True for exactly one character in `A..=Z`.
    pub fn is_valid_letter(input: &str) -> bool {
        let mut chars = input.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
    }

    pub fn is_already_guessed(&self, letter: char) -> bool {
        self.picked.contains(&letter)
    }

    pub fn guess_letter(&mut self, letter: char) {
        let fresh = self.picked.insert(letter);
        trace!(%letter, fresh, hit = self.secret.contains(letter), "letter guessed");
    }

    /// Guessed letters missing from the word, sorted and concatenated.
    pub fn discards(&self) -> String {
        let mut discards: Vec<_> = self
            .picked
            .iter()
            .copied()
            .filter(|&c| !self.secret.contains(c))
            .collect();
        discards.sort_unstable();
        discards.into_iter().collect()
    }

    /// The word with unguessed positions masked, one space between positions.
    pub fn current_guess(&self) -> String {
        let mut guess = String::with_capacity(self.secret.len() * 2);
        for (idx, c) in self.secret.chars().enumerate() {
            if idx > 0 {
                guess.push(' ');
            }
            guess.push(if self.picked.contains(&c) { c } else { PLACEHOLDER });
        }
        guess
    }

    pub fn is_solved(&self) -> bool {
        !self.current_guess().contains(PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_letters_are_valid() {
        assert!(Hangman::is_valid_letter("A"));
        assert!(Hangman::is_valid_letter("Z"));
    }

    #[test]
    fn other_input_is_invalid() {
        for input in ["", "a", "z", "AB", "A ", " A", "1", "_", "É", "\n"] {
            assert!(!Hangman::is_valid_letter(input), "{input:?}");
        }
    }

    #[test]
    fn guessing_records_the_letter() {
        let mut game = Hangman::with_secret("SOME");
        assert!(!game.is_already_guessed('A'));
        game.guess_letter('A');
        assert!(game.is_already_guessed('A'));
    }

    #[test]
    fn fresh_game_is_fully_masked() {
        let game = Hangman::with_secret("SECRETWORD");
        assert!(game.current_guess().chars().all(|c| c == '_' || c == ' '));
        assert_eq!(game.current_guess().len(), 19);
        assert_eq!(game.discards(), "");
        assert!(!game.is_solved());
    }

    #[test]
    fn correct_guess_is_revealed_but_not_discarded() {
        let mut game = Hangman::with_secret("SECRETWORD");
        game.guess_letter('S');
        assert_eq!(game.current_guess(), "S _ _ _ _ _ _ _ _ _");
        assert_eq!(game.discards(), "");
    }

    #[test]
    fn repeated_letters_are_revealed_everywhere() {
        let mut game = Hangman::with_secret("SECRETWORD");
        game.guess_letter('E');
        game.guess_letter('R');
        assert_eq!(game.current_guess(), "_ E _ R E _ _ _ R _");
    }

    #[test]
    fn cat_round() {
        let mut game = Hangman::with_secret("CAT");
        game.guess_letter('Z');
        assert_eq!(game.current_guess(), "_ _ _");
        assert_eq!(game.discards(), "Z");
        assert!(!game.is_solved());

        for letter in ['C', 'A', 'T'] {
            game.guess_letter(letter);
        }
        assert_eq!(game.current_guess(), "C A T");
        assert!(game.is_solved());
        assert_eq!(game.discards(), "Z");
    }

    #[test]
    fn discards_are_sorted() {
        let mut game = Hangman::with_secret("CAT");
        for letter in ['Q', 'B', 'Z', 'A', 'M'] {
            game.guess_letter(letter);
        }
        assert_eq!(game.discards(), "BMQZ");
    }

    #[test]
    fn unvalidated_letters_are_discarded() {
        let mut game = Hangman::with_secret("CAT");
        for letter in ['c', '!', 'ß', ' '] {
            game.guess_letter(letter);
        }
        assert_eq!(game.discards(), " !cß");
        assert_eq!(game.current_guess(), "_ _ _");
    }

    #[test]
    fn empty_secret_is_solved_immediately() {
        let game = Hangman::with_secret("");
        assert_eq!(game.current_guess(), "");
        assert!(game.is_solved());
    }

    #[test]
    fn seeded_games_pick_the_same_word() {
        let words = WordList::embedded();
        let a = Hangman::with_rng(&words, &mut SquirrelRng::with_seed(1234));
        let b = Hangman::with_rng(&words, &mut SquirrelRng::with_seed(1234));
        assert_eq!(a.secret_word(), b.secret_word());
    }

    #[test]
    fn default_words_produce_a_playable_game() {
        let game = Hangman::with_default_words();
        assert!(!game.secret_word().is_empty());
        assert!(!game.is_solved());
    }
}
