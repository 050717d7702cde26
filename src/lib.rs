//! imgconcat joins several images into a single row or column.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `[ImageSource] -> Vec<RgbaImage>` ([`load_images`]),
//!    every image normalized to RGBA8
//! 2. **Compose**: `Vec<RgbaImage> + CompositionConfig -> ComposedImage` ([`compose`]):
//!    resize pass, layout, paste onto an opaque white canvas
//! 3. **Encode**: `ComposedImage -> bytes` ([`encode_image`]), PNG or JPEG by output name
//!
//! The caller layer in [`handle_concat`] wraps these steps the way a request
//! handler would: it resolves client paths inside an allowed root, stages
//! uploads, and either returns the bytes or saves them.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the compositor**: [`compose`] is a pure function of its inputs.
//! - **No globals**: directories and settings are passed in ([`AppDirs`], [`CompositionConfig`]).
//! - **Fail fast**: a source that does not decode fails the whole request.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod effects;
mod encode;
mod foundation;
mod layout;
mod render;
mod service;
mod transform;

pub use assets::decode::{decode_image, open_image};
pub use assets::loader::load_images;
pub use assets::source::{ALLOWED_EXTENSIONS, ImageSource, is_allowed_image_name};
pub use composition::config::{
    CompositionConfig, DEFAULT_OUTPUT_NAME, FormFields, parse_dimension,
};
pub use effects::composite::{Rgba8, WHITE, mask_blend, paste_with_alpha};
pub use encode::output::{
    DEFAULT_JPEG_QUALITY, EncodeOptions, encode_image, ensure_parent_dir, flatten_to_rgb,
    write_image,
};
pub use foundation::core::{Alignment, Orientation, OutputFormat, ResizeMode, Size};
pub use foundation::error::{ConcatError, ConcatResult};
pub use layout::solver::{Layout, Placement, resolve_layout};
pub use render::compose::{ComposedImage, compose};
pub use service::dirs::{
    AppDirs, OUTPUTS_DIR_NAME, UPLOADS_DIR_NAME, list_images, normalize_output_name,
    resolve_within, sanitize_file_name,
};
pub use service::request::{
    ConcatOutcome, ConcatRequest, SaveOption, SourceSelection, UploadedFile, handle_concat,
};
pub use service::thumbnail::{THUMBNAIL_EDGE, THUMBNAIL_FILTER, thumbnail_png, thumbnail_size};
pub use service::uploads::{StagedUploads, candidate_path};
pub use transform::resize::{RESAMPLE_FILTER, apply_resize_mode, scale_to_fit, scaled_dimensions};
