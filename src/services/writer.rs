use crate::core::error::ManifestError;
use crate::core::io::Storage;
use crate::services::manifest::Manifest;
use std::path::Path;

/// Overwrites `path` with the rendered manifest. Not atomic: a failed write
/// can leave a partial file behind.
pub fn write_manifest(
    storage: &dyn Storage,
    path: &Path,
    manifest: &Manifest,
) -> Result<(), ManifestError> {
    storage
        .write(path, manifest.render().as_bytes())
        .map_err(|source| ManifestError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "Wrote {} lines to {}",
        manifest.lines().len(),
        path.display()
    );
    Ok(())
}
