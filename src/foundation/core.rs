use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Pixel dimensions.
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Build a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an RGBA raster.
    pub fn of(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Direction in which images are concatenated.
pub enum Orientation {
    /// Left-to-right; the cross axis is height.
    #[default]
    Horizontal,
    /// Top-to-bottom; the cross axis is width.
    Vertical,
}

impl Orientation {
    /// Parse a form value. Anything other than `horizontal` selects vertical.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "horizontal" => Self::Horizontal,
            _ => Self::Vertical,
        }
    }

    /// Length along the concatenation direction.
    pub fn primary(self, size: Size) -> u32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Length along the cross axis.
    pub fn cross(self, size: Size) -> u32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Policy for normalizing image dimensions before placement.
pub enum ResizeMode {
    /// Keep every image as decoded.
    #[default]
    None,
    /// Scale every image to the tallest height.
    MatchHeight,
    /// Scale every image to the widest width.
    MatchWidth,
    /// Scale each image to fit the configured max width/height.
    FitMax,
}

impl ResizeMode {
    /// Parse a form value. Unknown values fall back to [`ResizeMode::None`].
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "match_height" => Self::MatchHeight,
            "match_width" => Self::MatchWidth,
            "fit_max" => Self::FitMax,
            _ => Self::None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Cross-axis placement of images with differing cross dimension.
pub enum Alignment {
    /// Top (horizontal) or left (vertical).
    Start,
    /// Centered, rounding down.
    #[default]
    Center,
    /// Bottom (horizontal) or right (vertical).
    End,
}

impl Alignment {
    /// Parse a form value. Unknown values fall back to [`Alignment::Center`].
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "start" => Self::Start,
            "end" => Self::End,
            _ => Self::Center,
        }
    }

    /// Offset of an item of length `item` inside a container of length `container`.
    pub fn offset(self, container: u32, item: u32) -> u32 {
        let rem = container.saturating_sub(item);
        match self {
            Self::Start => 0,
            Self::Center => rem / 2,
            Self::End => rem,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Encoding of the composed image.
pub enum OutputFormat {
    /// Lossless, keeps the alpha channel.
    #[default]
    Png,
    /// Lossy, flattened to RGB against white.
    Jpeg,
}

impl OutputFormat {
    /// Infer the format from a file name's extension (`.jpg`/`.jpeg` → JPEG, else PNG).
    pub fn from_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            _ => Self::Png,
        }
    }

    /// MIME type for responses.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Matching `image` crate format.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
