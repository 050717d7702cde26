use crate::{
    assets::{
        loader::load_images,
        source::{ImageSource, is_allowed_image_name},
    },
    composition::config::{CompositionConfig, FormFields},
    encode::output::{EncodeOptions, encode_image, write_image},
    foundation::error::{ConcatError, ConcatResult},
    render::compose::{ComposedImage, compose},
    service::{
        dirs::{
            AppDirs, OUTPUTS_DIR_NAME, normalize_output_name, resolve_within, sanitize_file_name,
        },
        uploads::StagedUploads,
    },
};

#[derive(Clone, Debug)]
/// A file as received from a client.
pub struct UploadedFile {
    /// Client-supplied name; sanitized before use.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
/// Where the images come from.
pub enum SourceSelection {
    /// Files sent with the request, in the order given.
    Upload(Vec<UploadedFile>),
    /// Files picked from a folder under the root, in the order selected.
    Folder {
        /// Folder relative to the root.
        folder: String,
        /// File names inside `folder`.
        selected: Vec<String>,
    },
}

#[derive(Clone, Debug, Default)]
/// What to do with the encoded result.
pub enum SaveOption {
    /// Hand the bytes back to the caller.
    #[default]
    Download,
    /// Write under the root.
    Save {
        /// Destination folder relative to the root.
        folder: String,
    },
}

impl SaveOption {
    /// Save into the default `outputs` folder.
    pub fn save_to_outputs() -> Self {
        Self::Save {
            folder: OUTPUTS_DIR_NAME.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
/// One concatenation request, with form values still raw.
pub struct ConcatRequest {
    /// Image sources.
    pub sources: SourceSelection,
    /// Raw `orientation` value.
    pub orientation: Option<String>,
    /// Raw `resize_mode` value.
    pub resize_mode: Option<String>,
    /// Raw `max_width` value.
    pub max_width: Option<String>,
    /// Raw `max_height` value.
    pub max_height: Option<String>,
    /// Raw `alignment` value.
    pub alignment: Option<String>,
    /// Raw `output_name` value.
    pub output_name: Option<String>,
    /// Download or save.
    pub save: SaveOption,
}

impl ConcatRequest {
    /// A request with every form value unset.
    pub fn new(sources: SourceSelection) -> Self {
        Self {
            sources,
            orientation: None,
            resize_mode: None,
            max_width: None,
            max_height: None,
            alignment: None,
            output_name: None,
            save: SaveOption::Download,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of a successful request.
pub enum ConcatOutcome {
    /// Encoded bytes to stream back as an attachment.
    Download {
        /// Attachment file name.
        file_name: String,
        /// `image/png` or `image/jpeg`.
        mime_type: &'static str,
        /// Encoded image.
        bytes: Vec<u8>,
    },
    /// The image was written under the root.
    Saved {
        /// Location relative to the root, `/`-separated.
        relative_path: String,
    },
}

/// Run one concatenation request end to end.
///
/// Uploaded files are staged under `dirs.uploads` and removed before this
/// returns, on success and on error alike.
#[tracing::instrument(skip_all, fields(root = %dirs.root.display()))]
pub fn handle_concat(
    dirs: &AppDirs,
    req: ConcatRequest,
    encode_opts: &EncodeOptions,
) -> ConcatResult<ConcatOutcome> {
    let output_name = normalize_output_name(req.output_name.as_deref());
    let config = CompositionConfig::from_form(&FormFields {
        orientation: req.orientation.as_deref(),
        resize_mode: req.resize_mode.as_deref(),
        max_width: req.max_width.as_deref(),
        max_height: req.max_height.as_deref(),
        alignment: req.alignment.as_deref(),
        output_name: Some(&output_name),
    })?;
    encode_opts.validate()?;

    let mut staged = StagedUploads::new(&dirs.uploads);
    let sources = match req.sources {
        SourceSelection::Upload(files) => stage_uploads(&mut staged, files)?,
        SourceSelection::Folder { folder, selected } => {
            select_from_folder(dirs, &folder, &selected)?
        }
    };
    if sources.is_empty() {
        return Err(ConcatError::empty_input("No valid images found"));
    }

    let images = load_images(&sources)?;
    drop(sources);
    let ComposedImage { canvas, format, .. } = compose(images, &config)?;
    let bytes = encode_image(&canvas, format, encode_opts)?;
    drop(canvas);

    match req.save {
        SaveOption::Download => Ok(ConcatOutcome::Download {
            file_name: output_name,
            mime_type: format.mime_type(),
            bytes,
        }),
        SaveOption::Save { folder } => {
            let dest_root = resolve_within(&dirs.root, &folder)?;
            let out_path = dest_root.join(&output_name);
            write_image(&out_path, &bytes)?;
            let relative_path = dirs.relative_to_root(&out_path);
            tracing::info!(path = %relative_path, "saved composed image");
            Ok(ConcatOutcome::Saved { relative_path })
        }
    }
}

fn stage_uploads(
    staged: &mut StagedUploads,
    files: Vec<UploadedFile>,
) -> ConcatResult<Vec<ImageSource>> {
    if files.is_empty() {
        return Err(ConcatError::validation("No files uploaded"));
    }
    let mut sources = Vec::with_capacity(files.len());
    for file in files {
        let name = sanitize_file_name(&file.file_name);
        if name.is_empty() || !is_allowed_image_name(&name) {
            tracing::debug!(file = %file.file_name, "skipping upload with disallowed name");
            continue;
        }
        sources.push(ImageSource::Path(staged.stage(&name, &file.bytes)?));
    }
    Ok(sources)
}

fn select_from_folder(
    dirs: &AppDirs,
    folder: &str,
    selected: &[String],
) -> ConcatResult<Vec<ImageSource>> {
    let folder_path = resolve_within(&dirs.root, folder)?;
    if !folder_path.is_dir() {
        return Err(ConcatError::validation("Folder not found"));
    }
    if selected.is_empty() {
        return Err(ConcatError::validation("No server-side images selected"));
    }
    let mut sources = Vec::with_capacity(selected.len());
    for name in selected {
        if !is_allowed_image_name(name) {
            tracing::debug!(file = %name, "skipping selection with disallowed extension");
            continue;
        }
        let full = resolve_within(&folder_path, name)?;
        if !full.is_file() {
            tracing::debug!(file = %name, "skipping missing selection");
            continue;
        }
        sources.push(ImageSource::Path(full));
    }
    Ok(sources)
}

#[cfg(test)]
#[path = "../../tests/unit/service/request.rs"]
mod tests;
