use std::collections::TryReserveError;

use rs42::extensions::vec::TryPush;

pub type Position = [f64; 3];
pub type Normal = [f64; 3];

/// Zero-based indices into the vertex sequence.
pub type Face = [u32; 3];

/// Append-only vertex and normal sequences. An element's index is its
/// position in declaration order.
#[derive(Default, Debug)]
pub struct Geometry {
    vertices: Vec<Position>,
    normals: Vec<Normal>,
}

impl Geometry {
    pub fn add_vertex(&mut self, position: Position) -> Result<usize, TryReserveError> {
        push_indexed(&mut self.vertices, position)
    }

    pub fn add_normal(&mut self, normal: Normal) -> Result<usize, TryReserveError> {
        push_indexed(&mut self.normals, normal)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn into_parts(self) -> (Vec<Position>, Vec<Normal>) {
        (self.vertices, self.normals)
    }
}

fn push_indexed<T>(vec: &mut Vec<T>, elem: T) -> Result<usize, TryReserveError> {
    let index = vec.len();
    vec.try_push(elem)?;
    Ok(index)
}
