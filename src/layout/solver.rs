use crate::foundation::{
    core::{Alignment, Orientation, Size},
    error::{ConcatError, ConcatResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where one image lands on the canvas.
pub struct Placement {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Placed width (post-resize).
    pub width: u32,
    /// Placed height (post-resize).
    pub height: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Canvas size and per-image placement for one composition.
pub struct Layout {
    /// Canvas dimensions.
    pub canvas: Size,
    /// One entry per input image, in input order.
    pub placements: Vec<Placement>,
}

/// Lay out `sizes` in a single row or column.
///
/// Along the primary axis the canvas is the sum of the sizes; along the cross
/// axis it is their maximum, and each image is offset per `alignment`.
pub fn resolve_layout(
    sizes: &[Size],
    orientation: Orientation,
    alignment: Alignment,
) -> ConcatResult<Layout> {
    if sizes.is_empty() {
        return Err(ConcatError::empty_input("no images to lay out"));
    }

    let mut primary_total = 0u32;
    for s in sizes {
        primary_total = primary_total
            .checked_add(orientation.primary(*s))
            .ok_or_else(|| ConcatError::invalid_config("canvas exceeds u32 pixel range"))?;
    }
    let cross_max = sizes
        .iter()
        .map(|s| orientation.cross(*s))
        .max()
        .unwrap_or(0);

    let canvas = match orientation {
        Orientation::Horizontal => Size::new(primary_total, cross_max),
        Orientation::Vertical => Size::new(cross_max, primary_total),
    };

    let mut placements = Vec::with_capacity(sizes.len());
    let mut cursor = 0u32;
    for s in sizes {
        let cross = alignment.offset(cross_max, orientation.cross(*s));
        let (x, y) = match orientation {
            Orientation::Horizontal => (cursor, cross),
            Orientation::Vertical => (cross, cursor),
        };
        placements.push(Placement {
            x,
            y,
            width: s.width,
            height: s.height,
        });
        cursor += orientation.primary(*s);
    }

    Ok(Layout { canvas, placements })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
