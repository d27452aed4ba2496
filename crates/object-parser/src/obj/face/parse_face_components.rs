use rs42::extensions::PipeLine;

use crate::obj::{Face, ObjParsingErrorDetail};

/// Reads the first three `v[/vt[/vn]]` references, keeping only the vertex
/// index shifted to 0-based. Remaining references are left in `components`.
pub fn parse_face_components<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<Face, ObjParsingErrorDetail> {
    let mut face = Face::default();

    for index in face.iter_mut() {
        *index = components.next().map_or_else(
            || Err(ObjParsingErrorDetail::FaceShouldHaveAtLeast3Components),
            |component| parse_face_sub_components(component.split('/')),
        )?;
    }

    Ok(face)
}

fn parse_face_sub_components<'a>(
    mut sub_components: impl Iterator<Item = &'a str>,
) -> Result<u32, ObjParsingErrorDetail> {
    // `split` always yields at least one item, possibly empty
    sub_components
        .next()
        .unwrap_or_default()
        .parse::<i64>()
        .map_err(ObjParsingErrorDetail::InvalidSubComponentInFace)?
        .pipe(to_zero_based_index)
}

fn to_zero_based_index(index: i64) -> Result<u32, ObjParsingErrorDetail> {
    if index < 1 {
        return Err(ObjParsingErrorDetail::FaceVertexIndexIsNotPositive(index));
    }
    u32::try_from(index - 1).map_err(|_| ObjParsingErrorDetail::FaceVertexIndexTooLarge(index))
}
