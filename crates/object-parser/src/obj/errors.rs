use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{Debug, Display},
    io,
    num::{ParseFloatError, ParseIntError},
};

use crate::ErrorKind;

pub struct ObjParsingError {
    /// 1-based line number and raw content of the offending line.
    pub line: Option<(usize, String)>,
    pub detail: ObjParsingErrorDetail,
}

#[derive(Debug, thiserror::Error)]
pub enum ObjParsingErrorDetail {
    #[error("failed to open file: {0}")]
    FailedToOpenFile(io::Error),
    #[error("failed to read file: {0}")]
    FailedToReadFile(io::Error),

    #[error("allocation failure: {0}")]
    AllocationFailure(TryReserveError),

    #[error("vertex needs 3 components")]
    NotEnoughComponentsInVertex,
    #[error("invalid component in vertex: {0}")]
    InvalidComponentInVertex(ParseFloatError),

    #[error("normal needs 3 components")]
    NotEnoughComponentsInNormal,
    #[error("invalid component in normal: {0}")]
    InvalidComponentInNormal(ParseFloatError),

    #[error("usemtl needs a material name")]
    MissingMaterialName,

    #[error("face needs at least 3 vertex references")]
    FaceShouldHaveAtLeast3Components,
    #[error("invalid vertex index in face: {0}")]
    InvalidSubComponentInFace(ParseIntError),
    #[error("face vertex index {0} is not a positive 1-based index")]
    FaceVertexIndexIsNotPositive(i64),
    #[error("face vertex index {0} is too large")]
    FaceVertexIndexTooLarge(i64),
}

impl ObjParsingErrorDetail {
    pub fn kind(&self) -> ErrorKind {
        use ObjParsingErrorDetail::*;

        match self {
            FailedToOpenFile(_) | FailedToReadFile(_) | AllocationFailure(_) => ErrorKind::Io,
            NotEnoughComponentsInVertex
            | InvalidComponentInVertex(_)
            | NotEnoughComponentsInNormal
            | InvalidComponentInNormal(_)
            | MissingMaterialName
            | FaceShouldHaveAtLeast3Components
            | InvalidSubComponentInFace(_) => ErrorKind::MalformedLine,
            FaceVertexIndexIsNotPositive(_) | FaceVertexIndexTooLarge(_) => {
                ErrorKind::IndexOutOfRange
            }
        }
    }
}

impl ObjParsingError {
    pub fn kind(&self) -> ErrorKind {
        self.detail.kind()
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line.as_ref() {
            Some((number, content)) => write!(f, "line {number} \"{content}\": {}", self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

impl Error for ObjParsingError {}
