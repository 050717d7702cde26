use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ConcatError, ConcatResult};

/// Decode encoded bytes into straight-alpha RGBA8.
///
/// Sources without an alpha channel get a fully opaque one.
pub fn decode_image(bytes: &[u8]) -> ConcatResult<image::RgbaImage> {
    decode_named("<memory>", bytes)
}

/// Read and decode a file into straight-alpha RGBA8.
///
/// The format is sniffed from the content, so a misnamed file still decodes.
pub fn open_image(path: &Path) -> ConcatResult<image::RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_named(&path.display().to_string(), &bytes)
}

pub(crate) fn decode_named(name: &str, bytes: &[u8]) -> ConcatResult<image::RgbaImage> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| ConcatError::decode(name, e.to_string()))?;
    Ok(dyn_img.into_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
