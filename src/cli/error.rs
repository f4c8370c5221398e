use std::{io, result};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Prompt(#[from] promptly::ReadlineError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
