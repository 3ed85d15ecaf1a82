use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("word list contains no words")]
    EmptyWordList,
    #[error("unable to read word list at {} - {source}", path.display())]
    ReadWordList { path: PathBuf, source: io::Error },
}
