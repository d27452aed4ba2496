//! Wavefront `.obj` geometry extraction.
//!
//! Parsing goes through [`Obj`], validation through [`Mesh`], and the
//! [`emitter`] renders a mesh as two array literals.

pub mod emitter;
mod error;
mod mesh;
mod obj;

pub use emitter::{EmitterConfig, EmittingError};
pub use error::{Error, ErrorKind};
pub use mesh::{FaceVertexDoesNotExist, Mesh};
pub use obj::{
    Face, Geometry, Normal, Obj, ObjFile, ObjParsingError, ObjParsingErrorDetail, Position,
};

/// Parses, validates and renders the `.obj` file at `path` in one go.
pub fn convert_obj_file(path: &str, config: &EmitterConfig) -> Result<String, Error> {
    let obj = Obj::try_from(ObjFile(path))?;
    let mesh = Mesh::try_from(obj)?;
    Ok(emitter::render(&mesh, config)?)
}
