use crate::{
    composition::config::CompositionConfig,
    effects::composite::{WHITE, paste_with_alpha},
    foundation::{
        core::{OutputFormat, Size},
        error::{ConcatError, ConcatResult},
    },
    layout::solver::{Layout, resolve_layout},
    transform::resize::apply_resize_mode,
};

#[derive(Clone, Debug)]
/// Result of [`compose`]: the canvas plus the encoding chosen for it.
pub struct ComposedImage {
    /// Opaque-white canvas with every source pasted on it.
    pub canvas: image::RgbaImage,
    /// Encoding inferred from the output name.
    pub format: OutputFormat,
    /// Placement used, in input order, in post-resize pixels.
    pub layout: Layout,
}

/// Resize, lay out and paste `images` into one canvas.
///
/// Images are consumed and each one is dropped as soon as it has been pasted.
/// Pure: no filesystem or network IO.
#[tracing::instrument(skip(images, config), fields(count = images.len()))]
pub fn compose(
    images: Vec<image::RgbaImage>,
    config: &CompositionConfig,
) -> ConcatResult<ComposedImage> {
    if images.is_empty() {
        return Err(ConcatError::empty_input("no images to compose"));
    }

    let images = apply_resize_mode(images, config)?;
    let sizes: Vec<Size> = images.iter().map(Size::of).collect();
    let layout = resolve_layout(&sizes, config.orientation, config.alignment)?;

    let mut canvas =
        image::RgbaImage::from_pixel(layout.canvas.width, layout.canvas.height, image::Rgba(WHITE));
    for (img, placement) in images.into_iter().zip(&layout.placements) {
        paste_with_alpha(&mut canvas, &img, placement.x, placement.y);
    }

    let format = config.output_format();
    tracing::debug!(
        width = layout.canvas.width,
        height = layout.canvas.height,
        ?format,
        "composed canvas"
    );
    Ok(ComposedImage {
        canvas,
        format,
        layout,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
