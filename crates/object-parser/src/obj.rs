mod errors;
mod face;
mod geometry;
mod handle_unrecognized_line;
mod material;
mod normal;
mod vertex;

pub use errors::{ObjParsingError, ObjParsingErrorDetail};
pub use geometry::{Face, Geometry, Normal, Position};

use face::parse_face_line;
use handle_unrecognized_line::handle_unrecognized_line;
use material::parse_material_line;
use normal::parse_normal_line;
use vertex::parse_vertex_line;

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
};

use log::info;

/// Path of an `.obj` file to be opened and parsed.
pub struct ObjFile<'a>(pub &'a str);

/// Everything extracted from one `.obj` file, in declaration order.
#[derive(Debug)]
pub struct Obj {
    pub vertices: Box<[Position]>,
    pub normals: Box<[Normal]>,
    pub faces: Box<[Face]>,
    /// Material named by the last `usemtl` line, if any.
    pub current_material: Option<String>,
}

#[derive(Default, Debug)]
struct ObjBuilder {
    geometry: Geometry,
    faces: Vec<Face>,
    current_material: Option<String>,
    material_switches: usize,
}

impl ObjBuilder {
    fn build(self) -> Obj {
        let (vertices, normals) = self.geometry.into_parts();
        info!(
            "Parsed {} vertices, {} normals, {} faces ({} material switches)",
            vertices.len(),
            normals.len(),
            self.faces.len(),
            self.material_switches,
        );
        Obj {
            vertices: vertices.into_boxed_slice(),
            normals: normals.into_boxed_slice(),
            faces: self.faces.into_boxed_slice(),
            current_material: self.current_material,
        }
    }
}

impl TryFrom<ObjFile<'_>> for Obj {
    type Error = ObjParsingError;

    fn try_from(file_name: ObjFile) -> Result<Self, Self::Error> {
        let file = File::open(file_name.0).map_err(|err| ObjParsingError {
            line: None,
            detail: ObjParsingErrorDetail::FailedToOpenFile(err),
        })?;
        BufReader::new(file).try_into()
    }
}

impl<R> TryFrom<BufReader<R>> for Obj
where
    R: Read,
{
    type Error = ObjParsingError;

    fn try_from(buf_reader: BufReader<R>) -> Result<Self, ObjParsingError> {
        let mut obj_builder = ObjBuilder::default();

        for (line_index, line) in buf_reader.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line.map_err(|err| ObjParsingError {
                line: None,
                detail: ObjParsingErrorDetail::FailedToReadFile(err),
            })?;

            parse_line(line_number, &line, &mut obj_builder).map_err(|err| ObjParsingError {
                line: Some((line_number, line)),
                detail: err,
            })?;
        }

        Ok(obj_builder.build())
    }
}

fn parse_line(
    line_number: usize,
    line: &str,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let mut split = line.split_whitespace();
    let Some(first_word) = split.next() else {
        return Ok(());
    };

    match first_word {
        "usemtl" => parse_material_line(&mut split, obj_builder),
        "v" => parse_vertex_line(&mut split, &mut obj_builder.geometry).map(drop),
        "vn" => parse_normal_line(&mut split, &mut obj_builder.geometry).map(drop),
        "f" => parse_face_line(line_number, &mut split, &mut obj_builder.faces),
        _ => {
            handle_unrecognized_line(first_word, line_number, line);
            Ok(())
        }
    }
}
