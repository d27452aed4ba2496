use rs42::extensions::PipeLine;

use super::{Geometry, Normal, ObjParsingErrorDetail};

/// Normals are stored as written, without normalization.
pub fn parse_normal_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    geometry: &mut Geometry,
) -> Result<usize, ObjParsingErrorDetail> {
    let mut normal = Normal::default();

    for elem in normal.iter_mut() {
        *elem = components.next().map_or_else(
            || Err(ObjParsingErrorDetail::NotEnoughComponentsInNormal),
            parse_normal_component,
        )?;
    }

    geometry
        .add_normal(normal)
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}

fn parse_normal_component(str: &str) -> Result<f64, ObjParsingErrorDetail> {
    str.parse::<f64>()
        .map_err(ObjParsingErrorDetail::InvalidComponentInNormal)?
        .pipe(Ok)
}
