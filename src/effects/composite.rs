/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Opaque white, the canvas background.
pub const WHITE: Rgba8 = [255, 255, 255, 255];

/// Blend `src` into `dst` using the source alpha as a mask on all four bands.
///
/// Each band becomes `dst + (src - dst) * a / 255`, rounded, where `a` is the
/// source alpha. Alpha is interpolated like the colour bands, so a
/// half-transparent pixel on opaque white ends up with alpha 191.
pub fn mask_blend(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let a = u32::from(src[3]);
    match a {
        0 => dst,
        255 => src,
        _ => {
            let inv = 255 - a;
            let mut out = [0u8; 4];
            for i in 0..4 {
                out[i] = div255_round(u32::from(src[i]) * a + u32::from(dst[i]) * inv);
            }
            out
        }
    }
}

/// Paste `src` onto `canvas` with its top-left corner at `(x, y)`.
///
/// Each pixel goes through [`mask_blend`]; parts falling outside the canvas are clipped.
pub fn paste_with_alpha(canvas: &mut image::RgbaImage, src: &image::RgbaImage, x: u32, y: u32) {
    let (cw, ch) = canvas.dimensions();
    if x >= cw || y >= ch {
        return;
    }
    let w = src.width().min(cw - x);
    let h = src.height().min(ch - y);
    for sy in 0..h {
        for sx in 0..w {
            let s = src.get_pixel(sx, sy).0;
            let d = canvas.get_pixel_mut(x + sx, y + sy);
            d.0 = mask_blend(d.0, s);
        }
    }
}

fn div255_round(num: u32) -> u8 {
    ((num + 127) / 255).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
