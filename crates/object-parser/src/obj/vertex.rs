use rs42::extensions::PipeLine;

use super::{Geometry, ObjParsingErrorDetail, Position};

/// Extra components (the optional `w`, vertex colors) are ignored.
pub fn parse_vertex_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    geometry: &mut Geometry,
) -> Result<usize, ObjParsingErrorDetail> {
    let mut position = Position::default();

    for elem in position.iter_mut() {
        let Some(str) = components.next() else {
            return Err(ObjParsingErrorDetail::NotEnoughComponentsInVertex);
        };
        *elem = parse_vertex_component(str)?;
    }

    geometry
        .add_vertex(position)
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}

fn parse_vertex_component(str: &str) -> Result<f64, ObjParsingErrorDetail> {
    str.parse::<f64>()
        .map_err(ObjParsingErrorDetail::InvalidComponentInVertex)?
        .pipe(Ok)
}
