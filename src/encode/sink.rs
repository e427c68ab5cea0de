use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::EyeResult;

/// Destination for encoded assets, addressed by paths relative to the output root.
pub trait AssetSink {
    /// Store `bytes` under `rel` and return the full location written.
    fn write_asset(&mut self, rel: &Path, bytes: &[u8]) -> EyeResult<PathBuf>;
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> EyeResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Writes assets as files below a root directory.
///
/// Existing files are overwritten. A failed write may leave a partial file behind; rerunning
/// regenerates it.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSink for DirSink {
    fn write_asset(&mut self, rel: &Path, bytes: &[u8]) -> EyeResult<PathBuf> {
        let path = self.root.join(rel);
        ensure_parent_dir(&path)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote asset");
        Ok(path)
    }
}

/// Keeps assets in memory, for tests and for comparing runs.
#[derive(Debug, Default)]
pub struct InMemorySink {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, rel: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(rel.as_ref()).map(Vec::as_slice)
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, Vec<u8>> {
        &self.files
    }
}

impl AssetSink for InMemorySink {
    fn write_asset(&mut self, rel: &Path, bytes: &[u8]) -> EyeResult<PathBuf> {
        self.files.insert(rel.to_path_buf(), bytes.to_vec());
        Ok(rel.to_path_buf())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
