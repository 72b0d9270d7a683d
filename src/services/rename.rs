use crate::core::error::RenameError;
use crate::core::io::Storage;
use std::fmt;
use std::path::Path;

pub const DOUBLED_SUFFIX: &str = ".mp3.mp3";

/// `clip.mp3.mp3` -> `clip.mp3`; anything else is left alone.
pub fn strip_double_extension(name: &str) -> Option<String> {
    name.strip_suffix(DOUBLED_SUFFIX)
        .map(|stem| format!("{}.mp3", stem))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },
    Failed { from: String, reason: String },
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Renamed { from, to } => write!(f, "Renamed: {} -> {}", from, to),
            RenameOutcome::Failed { from, reason } => {
                write!(f, "ERROR renaming {}: {}", from, reason)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.renamed_count()
    }

    pub fn summary(&self) -> String {
        match self.renamed_count() {
            0 => "No files with .mp3.mp3 extension found.".to_string(),
            n => format!("\nFinished renaming {} files.", n),
        }
    }
}

/// Renames every `*.mp3.mp3` entry in `audio_dir`. A failed rename is
/// recorded and the remaining files are still processed.
pub fn fix_double_extensions(
    storage: &dyn Storage,
    audio_dir: &Path,
) -> Result<RenameReport, RenameError> {
    if !storage.is_dir(audio_dir) {
        return Err(RenameError::MissingDirectory(audio_dir.to_path_buf()));
    }

    let mut entries = storage
        .list(audio_dir)
        .map_err(|source| RenameError::ListDirectory {
            path: audio_dir.to_path_buf(),
            source,
        })?;
    entries.sort();

    let mut report = RenameReport::default();
    for old_path in entries {
        let Some(name) = old_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(new_name) = strip_double_extension(name) else {
            continue;
        };
        let new_path = audio_dir.join(&new_name);

        let outcome = match storage.rename(&old_path, &new_path) {
            Ok(()) => RenameOutcome::Renamed {
                from: name.to_string(),
                to: new_name,
            },
            Err(e) => {
                log::warn!("Failed to rename {}: {}", old_path.display(), e);
                RenameOutcome::Failed {
                    from: name.to_string(),
                    reason: e.to_string(),
                }
            }
        };
        report.outcomes.push(outcome);
    }

    log::info!(
        "Processed {}: {} renamed, {} failed",
        audio_dir.display(),
        report.renamed_count(),
        report.failed_count()
    );
    Ok(report)
}
