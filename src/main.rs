use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use anyhow::Context;
use clap::Parser;
use hangman::{Hangman, Outcome, WordList};
use squirrel_rng::SquirrelRng;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Debug, Parser)]
#[clap(version, about = "Guess the secret word one letter at a time")]
struct Args {
    /// path to word list, one word per line (defaults to the built-in dictionary)
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// seed for picking the secret word
    #[clap(short, long)]
    seed: Option<u32>,
}

fn main() {
    init_logging();
    if let Err(e) = run(&Args::parse()) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut game = build_game(args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = hangman::play(&mut game, stdin.lock(), stdout.lock())
        .context("lost the terminal mid-game")?;
    debug!(?outcome, "round over");

    if outcome == Outcome::Abandoned {
        let mut stdout = stdout.lock();
        writeln!(stdout)?;
        writeln!(stdout, "The word was: {}", game.secret_word())?;
    }

    Ok(())
}

fn build_game(args: &Args) -> hangman::Result<Hangman> {
    let words = args.words.as_deref().map(WordList::from_path).transpose()?;

    let game = match (words, args.seed) {
        (None, None) => Hangman::with_default_words(),
        (Some(words), None) => Hangman::new(&words),
        (words, Some(seed)) => {
            let words = words.unwrap_or_else(WordList::embedded);
            Hangman::with_rng(&words, &mut SquirrelRng::with_seed(seed))
        }
    };
    Ok(game)
}
