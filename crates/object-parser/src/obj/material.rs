use log::trace;

use super::{ObjBuilder, ObjParsingErrorDetail};

pub fn parse_material_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let name = components
        .next()
        .ok_or(ObjParsingErrorDetail::MissingMaterialName)?;

    trace!("Switching to material \"{name}\"");
    obj_builder.current_material = Some(name.to_owned());
    obj_builder.material_switches += 1;
    Ok(())
}
