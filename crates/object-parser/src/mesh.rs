use thiserror::Error;

use crate::{Face, Obj, Position};

/// Vertex positions and triangles whose indices are known to be in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Box<[Position]>,
    faces: Box<[Face]>,
}

#[derive(Debug, Error)]
#[error("face {face} references vertex index {index} but only {vertex_count} vertices exist")]
pub struct FaceVertexDoesNotExist {
    /// 0-based ordinal of the face in declaration order.
    pub face: usize,
    pub index: u32,
    pub vertex_count: usize,
}

impl TryFrom<Obj> for Mesh {
    type Error = FaceVertexDoesNotExist;

    fn try_from(obj: Obj) -> Result<Self, Self::Error> {
        let vertex_count = obj.vertices.len();

        for (face, indices) in obj.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(FaceVertexDoesNotExist {
                    face,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Mesh {
            vertices: obj.vertices,
            faces: obj.faces,
        })
    }
}

impl Mesh {
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Positions of the three corners of each face.
    pub fn triangles(&self) -> impl Iterator<Item = [Position; 3]> + '_ {
        self.faces
            .iter()
            .map(|face| face.map(|index| self.vertices[index as usize]))
    }
}
