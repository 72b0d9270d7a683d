use crate::core::config::Config;
use crate::core::error::ManifestError;
use crate::core::io::Storage;
use crate::services::loader::load_stories;
use crate::services::manifest::build_manifest;
use crate::services::writer::write_manifest;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub stories: usize,
    pub dialogue_lines: usize,
    pub command_lines: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully generated audio list to: {}",
            self.output_path.display()
        )
    }
}

/// Load, build, write. The output file is only touched once the input has
/// been read and parsed.
pub fn generate(config: &Config, storage: &dyn Storage) -> Result<GenerationReport, ManifestError> {
    let stories = load_stories(storage, &config.stories_file())?;
    let manifest = build_manifest(&stories);
    log::info!(
        "Built manifest: {} dialogue lines, {} library commands",
        manifest.dialogue_count(),
        manifest.command_count()
    );
    write_manifest(storage, &config.output_path, &manifest)?;

    Ok(GenerationReport {
        output_path: config.output_path.clone(),
        stories: stories.len(),
        dialogue_lines: manifest.dialogue_count(),
        command_lines: manifest.command_count(),
    })
}
