use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::ConcatResult;

/// Uploaded files written to a staging directory for the length of one request.
///
/// Every staged file is removed when the guard drops, whichever way the
/// request ends.
#[derive(Debug)]
pub struct StagedUploads {
    dir: PathBuf,
    staged: Vec<PathBuf>,
}

impl StagedUploads {
    /// Stage into `dir`; it is created on the first [`stage`](Self::stage).
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            staged: Vec::new(),
        }
    }

    /// Write `bytes` under a name derived from `file_name`, never overwriting.
    ///
    /// Names are claimed with `create_new`, so concurrent stagers sharing the
    /// directory never end up on the same file. `file_name` must already be
    /// sanitized.
    pub fn stage(&mut self, file_name: &str, bytes: &[u8]) -> ConcatResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create upload directory '{}'", self.dir.display()))?;
        let mut n = 0u32;
        let (path, mut file) = loop {
            let candidate = candidate_path(&self.dir, file_name, n);
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
            {
                Ok(file) => break (candidate, file),
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => n += 1,
                Err(err) => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("stage upload '{}'", candidate.display()))
                        .into());
                }
            }
        };
        // tracked before writing so a failed write still gets cleaned up
        self.staged.push(path.clone());
        file.write_all(bytes)
            .with_context(|| format!("stage upload '{}'", path.display()))?;
        Ok(path)
    }
}

impl Drop for StagedUploads {
    fn drop(&mut self) {
        for path in self.staged.drain(..) {
            if let Err(err) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), %err, "failed to remove staged upload");
            }
        }
    }
}

/// The `n`th name tried for `file_name` in `dir`: `dir/name` for 0, then
/// `dir/stem_N.ext`.
pub fn candidate_path(dir: &Path, file_name: &str, n: u32) -> PathBuf {
    if n == 0 {
        return dir.join(file_name);
    }
    let as_path = Path::new(file_name);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = as_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    dir.join(format!("{stem}_{n}{ext}"))
}

#[cfg(test)]
#[path = "../../tests/unit/service/uploads.rs"]
mod tests;
