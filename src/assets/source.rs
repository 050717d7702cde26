use std::path::{Path, PathBuf};

/// Extensions accepted for composition, lowercase and without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

#[derive(Clone, Debug)]
/// One image to load.
///
/// Path sources must already be resolved inside the allowed root by the caller.
pub enum ImageSource {
    /// In-memory bytes, e.g. an upload that never touched disk.
    Bytes {
        /// Display name used in errors and logs.
        name: String,
        /// Encoded image bytes.
        bytes: Vec<u8>,
    },
    /// A trusted file on disk.
    Path(PathBuf),
}

impl ImageSource {
    /// Name shown in logs and decode errors.
    pub fn display_name(&self) -> String {
        match self {
            Self::Bytes { name, .. } => name.clone(),
            Self::Path(p) => p.display().to_string(),
        }
    }
}

/// Case-insensitive check of a file name against [`ALLOWED_EXTENSIONS`].
pub fn is_allowed_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
