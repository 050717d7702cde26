use std::path::Path;

use image::imageops::FilterType;

use crate::{
    assets::{decode::open_image, source::is_allowed_image_name},
    encode::output::{EncodeOptions, encode_image},
    foundation::{
        core::{OutputFormat, Size},
        error::{ConcatError, ConcatResult},
    },
    service::dirs::resolve_within,
};

/// Longest edge of a thumbnail.
pub const THUMBNAIL_EDGE: u32 = 240;

/// Thumbnails resample bicubically; the full pipeline uses Lanczos3.
pub const THUMBNAIL_FILTER: FilterType = FilterType::CatmullRom;

/// PNG preview of `folder/file_name`, shrunk to fit [`THUMBNAIL_EDGE`] square.
///
/// Images already inside the box are not enlarged.
pub fn thumbnail_png(root: &Path, folder: &str, file_name: &str) -> ConcatResult<Vec<u8>> {
    let folder_path = resolve_within(root, folder)?;
    let full = resolve_within(&folder_path, file_name)?;
    if !is_allowed_image_name(file_name) || !full.is_file() {
        return Err(ConcatError::validation(format!(
            "no image named '{file_name}' in '{folder}'"
        )));
    }

    let img = open_image(&full)?;
    let size = thumbnail_size(Size::of(&img));
    let thumb = if size == Size::of(&img) {
        img
    } else {
        image::imageops::resize(&img, size.width, size.height, THUMBNAIL_FILTER)
    };
    encode_image(&thumb, OutputFormat::Png, &EncodeOptions::default())
}

/// Size of the thumbnail for an image of `size`.
///
/// The longer edge lands on [`THUMBNAIL_EDGE`] and the shorter one is rounded
/// to the nearest pixel (at least 1). Images already inside the box keep
/// their size.
pub fn thumbnail_size(size: Size) -> Size {
    let longest = size.width.max(size.height);
    if longest <= THUMBNAIL_EDGE {
        return size;
    }
    let (edge, longest) = (u64::from(THUMBNAIL_EDGE), u64::from(longest));
    // dim <= longest, so the result never exceeds THUMBNAIL_EDGE
    let scale = |dim: u32| ((u64::from(dim) * edge + longest / 2) / longest).max(1) as u32;
    Size::new(scale(size.width), scale(size.height))
}

#[cfg(test)]
#[path = "../../tests/unit/service/thumbnail.rs"]
mod tests;
