use thiserror::Error;

use crate::{mesh::FaceVertexDoesNotExist, EmittingError, ObjParsingError};

/// Coarse classification of every failure the conversion can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedLine,
    IndexOutOfRange,
    EmptyCollection,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parsing(#[from] ObjParsingError),

    #[error(transparent)]
    Validation(#[from] FaceVertexDoesNotExist),

    #[error(transparent)]
    Emitting(#[from] EmittingError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parsing(err) => err.kind(),
            Error::Validation(_) => ErrorKind::IndexOutOfRange,
            Error::Emitting(err) => err.kind(),
        }
    }
}
