use image::imageops::FilterType;

use crate::{
    composition::config::CompositionConfig,
    foundation::{
        core::{ResizeMode, Size},
        error::{ConcatError, ConcatResult},
    },
};

/// Resampling filter for every scale operation, up or down.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Target size for fitting `size` into the given bound(s), or `None` to keep it as is.
///
/// With both bounds the tighter ratio wins; with one bound that axis alone drives
/// the ratio. Upscaling is allowed. The driving axis lands exactly on its bound
/// and the other axis is floored, never below 1 px. A zero ratio (bound of `0`)
/// and an unchanged result both yield `None`.
pub fn scaled_dimensions(
    size: Size,
    max_w: Option<u32>,
    max_h: Option<u32>,
) -> ConcatResult<Option<Size>> {
    let (w, h) = (u64::from(size.width), u64::from(size.height));
    // ratio = num / den
    let (num, den) = match (max_w.map(u64::from), max_h.map(u64::from)) {
        (None, None) => return Ok(None),
        (Some(mw), None) => (mw, w),
        (None, Some(mh)) => (mh, h),
        (Some(mw), Some(mh)) => {
            if mw * h <= mh * w {
                (mw, w)
            } else {
                (mh, h)
            }
        }
    };
    if num == 0 || den == 0 {
        return Ok(None);
    }

    let scale = |v: u64| -> ConcatResult<u32> {
        let scaled = (v * num / den).max(1);
        u32::try_from(scaled).map_err(|_| {
            ConcatError::invalid_config(format!(
                "scaling {}x{} produces a dimension of {scaled} px",
                size.width, size.height
            ))
        })
    };
    let out = Size::new(scale(w)?, scale(h)?);
    if out == size {
        return Ok(None);
    }
    Ok(Some(out))
}

/// Scale one image to fit the bound(s), skipping the resample when nothing changes.
pub fn scale_to_fit(
    img: image::RgbaImage,
    max_w: Option<u32>,
    max_h: Option<u32>,
) -> ConcatResult<image::RgbaImage> {
    match scaled_dimensions(Size::of(&img), max_w, max_h)? {
        Some(target) => Ok(image::imageops::resize(
            &img,
            target.width,
            target.height,
            RESAMPLE_FILTER,
        )),
        None => Ok(img),
    }
}

/// Run the resize pass selected by `config.resize_mode`.
pub fn apply_resize_mode(
    images: Vec<image::RgbaImage>,
    config: &CompositionConfig,
) -> ConcatResult<Vec<image::RgbaImage>> {
    let (max_w, max_h) = match config.resize_mode {
        ResizeMode::None => return Ok(images),
        ResizeMode::MatchHeight => (None, images.iter().map(|i| i.height()).max()),
        ResizeMode::MatchWidth => (images.iter().map(|i| i.width()).max(), None),
        ResizeMode::FitMax => (config.max_width, config.max_height),
    };
    if max_w.is_none() && max_h.is_none() {
        return Ok(images);
    }
    tracing::debug!(mode = ?config.resize_mode, ?max_w, ?max_h, "resize pass");
    images
        .into_iter()
        .map(|img| scale_to_fit(img, max_w, max_h))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resize.rs"]
mod tests;
