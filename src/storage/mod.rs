use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::errors::AppResult;

/// Local-disk store for uploaded files. Files land in the configured
/// directory as `<millis-timestamp><original extension>` and are served
/// back under `/uploads/<name>`.
#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!("Upload store ready at {}", dir.display());
        Ok(UploadStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copies a buffered upload into the store and returns its public path.
    pub fn save(&self, source: &Path, original_name: Option<&str>) -> AppResult<String> {
        let extension = original_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        let file_name = format!("{}{}", Utc::now().timestamp_millis(), extension);
        let target = self.dir.join(&file_name);

        fs::copy(source, &target)?;

        Ok(format!("/uploads/{}", file_name))
    }
}
