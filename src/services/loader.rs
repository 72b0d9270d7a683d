use crate::core::error::ManifestError;
use crate::core::io::Storage;
use crate::core::model::Story;
use std::path::Path;

/// Reads the story dataset. The root must be a JSON array of story objects.
pub fn load_stories(storage: &dyn Storage, path: &Path) -> Result<Vec<Story>, ManifestError> {
    let content = storage
        .read(path)
        .map_err(|source| ManifestError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;

    let stories: Vec<Story> =
        serde_json::from_slice(&content).map_err(|source| ManifestError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Loaded {} stories from {}", stories.len(), path.display());
    Ok(stories)
}
