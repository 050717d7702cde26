use crate::{
    assets::{
        decode::{decode_named, open_image},
        source::ImageSource,
    },
    foundation::error::ConcatResult,
};

/// Decode every source, preserving input order.
///
/// Fails fast: the first source that cannot be read or decoded fails the whole
/// call and nothing is returned. Sources are expected to be filtered by the
/// caller (allowed extensions, allowed root) before they get here.
#[tracing::instrument(skip(sources), fields(count = sources.len()))]
pub fn load_images(sources: &[ImageSource]) -> ConcatResult<Vec<image::RgbaImage>> {
    let mut out = Vec::with_capacity(sources.len());
    for source in sources {
        out.push(load_one(source)?);
    }
    Ok(out)
}

fn load_one(source: &ImageSource) -> ConcatResult<image::RgbaImage> {
    let img = match source {
        ImageSource::Bytes { name, bytes } => decode_named(name, bytes)?,
        ImageSource::Path(path) => open_image(path)?,
    };
    tracing::debug!(
        source = %source.display_name(),
        width = img.width(),
        height = img.height(),
        "decoded source"
    );
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
