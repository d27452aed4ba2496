mod parse_face_components;

use log::debug;
use rs42::extensions::vec::TryPush;

use super::{Face, ObjParsingErrorDetail};
use parse_face_components::parse_face_components;

/// Only the first three references are kept: polygons with more vertices are
/// truncated to their first triangle, not triangulated.
pub fn parse_face_line<'a>(
    line_number: usize,
    components: &mut impl Iterator<Item = &'a str>,
    faces: &mut Vec<Face>,
) -> Result<(), ObjParsingErrorDetail> {
    let face = parse_face_components(components)?;

    let dropped = components.count();
    if dropped > 0 {
        debug!("Face on line {line_number} has {} vertices, keeping the first 3", dropped + 3);
    }

    faces
        .try_push(face)
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
