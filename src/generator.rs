use log::{debug, error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::params::ParameterSet;
use crate::registry::{TemplateEntry, TemplateRegistry};

/// The resolved output path and content of one template entry.
///
/// Lives only between substitution and the write that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub content: String,
}

/// Renders a registry against a parameter set and writes every result below
/// an output directory.
pub struct FileGenerator {
    output_dir: PathBuf,
}

impl FileGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Creates the directory chain if any part of it is missing.
    fn ensure_dir_exists(path: &Path) -> Result<()> {
        // create_dir_all tolerates the directory appearing concurrently
        fs::create_dir_all(path).map_err(|e| {
            error!("Failed to create directory: {:?}", path);
            ScaffoldError::io(path, e)
        })?;
        debug!("Ensured directory {:?}", path);
        Ok(())
    }

    /// Substitutes the entry's key and body without touching the filesystem.
    pub fn resolve(
        &self,
        entry: &TemplateEntry,
        params: &ParameterSet,
    ) -> Result<RenderedArtifact> {
        let relative = entry.key().render(params)?;
        let content = entry.body().render(params)?;
        let path = self.output_dir.join(&relative);

        if relative.is_empty()
            || relative.ends_with('/')
            || relative.ends_with(std::path::MAIN_SEPARATOR)
            || path.file_name().is_none()
        {
            error!("Output path must have a filename: {:?}", path);
            return Err(ScaffoldError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "output path must have a filename"),
            ));
        }

        Ok(RenderedArtifact { path, content })
    }

    /// Writes an artifact, creating its directory and replacing any existing file.
    pub fn write_artifact(artifact: RenderedArtifact) -> Result<PathBuf> {
        if let Some(parent) = artifact.path.parent() {
            Self::ensure_dir_exists(parent)?;
        }

        fs::write(&artifact.path, artifact.content).map_err(|e| {
            error!("Failed to write rendered content to file: {:?}", artifact.path);
            ScaffoldError::io(&artifact.path, e)
        })?;
        info!("{:?}", artifact.path);
        Ok(artifact.path)
    }

    /// Renders and writes every registry entry in order.
    ///
    /// Stops at the first failure. Files written for earlier entries are kept;
    /// nothing is written for the failing entry.
    ///
    /// Returns the written paths in registry order.
    pub fn render(
        &self,
        registry: &TemplateRegistry,
        params: &ParameterSet,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(registry.len());
        for entry in registry.entries() {
            let artifact = self.resolve(entry, params).map_err(|e| {
                error!("Failed to render template {:?}", entry.key().as_str());
                e
            })?;
            written.push(Self::write_artifact(artifact)?);
        }
        Ok(written)
    }
}
