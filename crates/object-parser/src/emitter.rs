//! Renders a [`Mesh`] as two JavaScript array declarations.
//!
//! ```text
//! // Parsing cube.obj for obj data
//! // Autogenerated by obj-to-array, scanning included obj file
//!
//! /** @global Array of vertex position data, 3 vertices */
//! var vertex_data = [
//!     0.0, 0.0, 0.0,
//!     1.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0
//! ];
//!
//! /** @global Array of vertex index data */
//! var poly_data = [
//!     0, 1, 2
//! ];
//!
//! // Parsed 1 triangles, end autogenerated section
//! ```

use std::fmt::{self, Debug, Write};

use thiserror::Error;

use crate::{ErrorKind, Mesh};

pub const DEFAULT_VERTEX_ARRAY_NAME: &str = "vertex_data";
pub const DEFAULT_FACE_ARRAY_NAME: &str = "poly_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Shown in the leading comment, usually the input path.
    pub source_name: String,
    pub vertex_array_name: String,
    pub face_array_name: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            source_name: String::from("<input>"),
            vertex_array_name: DEFAULT_VERTEX_ARRAY_NAME.to_owned(),
            face_array_name: DEFAULT_FACE_ARRAY_NAME.to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EmittingError {
    #[error("cannot emit {0} array: it has no elements")]
    EmptyCollection(&'static str),
    #[error("failed to format output: {0}")]
    FailedToFormat(#[from] fmt::Error),
}

impl EmittingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmittingError::EmptyCollection(_) => ErrorKind::EmptyCollection,
            EmittingError::FailedToFormat(_) => ErrorKind::Io,
        }
    }
}

pub fn render(mesh: &Mesh, config: &EmitterConfig) -> Result<String, EmittingError> {
    let mut output = String::new();
    write_arrays(mesh, config, &mut output)?;
    Ok(output)
}

/// Both collections are checked before anything is written to `out`.
pub fn write_arrays(
    mesh: &Mesh,
    config: &EmitterConfig,
    out: &mut impl Write,
) -> Result<(), EmittingError> {
    if mesh.vertices().is_empty() {
        return Err(EmittingError::EmptyCollection("vertex"));
    }
    if mesh.faces().is_empty() {
        return Err(EmittingError::EmptyCollection("face"));
    }

    writeln!(out, "// Parsing {} for obj data", config.source_name)?;
    writeln!(
        out,
        "// Autogenerated by obj-to-array, scanning included obj file\n"
    )?;

    writeln!(
        out,
        "/** @global Array of vertex position data, {} vertices */",
        mesh.vertices().len()
    )?;
    write_array(out, &config.vertex_array_name, mesh.vertices())?;

    writeln!(out, "/** @global Array of vertex index data */")?;
    write_array(out, &config.face_array_name, mesh.faces())?;

    writeln!(
        out,
        "// Parsed {} triangles, end autogenerated section",
        mesh.faces().len()
    )?;
    Ok(())
}

fn write_array<T: Debug>(out: &mut impl Write, name: &str, rows: &[[T; 3]]) -> fmt::Result {
    writeln!(out, "var {name} = [")?;
    let last = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        let separator = if i == last { "" } else { "," };
        writeln!(out, "\t{:?}, {:?}, {:?}{separator}", row[0], row[1], row[2])?;
    }
    writeln!(out, "];\n")
}
