use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use crate::config::constants::STAGED_FILE_PREFIX;

/// A snippet written to disk for a file-based tool.
///
/// The file is created exclusively under a random name, so concurrent
/// requests never share one. It is removed when the value is dropped or
/// closed, whichever comes first.
pub struct StagedFile {
    file: NamedTempFile,
}

impl StagedFile {
    /// `extension` is given without the leading dot.
    pub fn stage(code: &str, extension: &str) -> io::Result<Self> {
        let suffix = format!(".{}", extension);
        let mut file = Builder::new()
            .prefix(STAGED_FILE_PREFIX)
            .suffix(&suffix)
            .tempfile()?;

        file.write_all(code.as_bytes())?;
        file.flush()?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn close(self) {
        let path = self.path().to_path_buf();
        if let Err(e) = self.file.close() {
            log::warn!("⚠️ Failed to remove staged file {}: {}", path.display(), e);
        }
    }
}
