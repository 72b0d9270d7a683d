use crate::core::model::{CommandGroup, CommandLibrary, Story};
use crate::core::naming::{dialogue_filename, flat_command_filename, grouped_command_filename};

pub const SEPARATOR: &str = "====================================================================";
pub const DIALOGUE_HEADER: &str = "--- Dialogue Lines by Act ---";
pub const LIBRARY_HEADER: &str = "--- Command Library ---";
pub const NO_LIBRARY_NOTICE: &str = "  No command library found for this story.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dialogue,
    Command,
}

/// One expected audio file and the line it should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub kind: EntryKind,
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    lines: Vec<String>,
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn dialogue_count(&self) -> usize {
        self.count(EntryKind::Dialogue)
    }

    pub fn command_count(&self) -> usize {
        self.count(EntryKind::Command)
    }

    fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// The file body: lines joined by `\n`, without a final terminator.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn entry(&mut self, kind: EntryKind, indent: &str, filename: String, text: &str) {
        self.lines.push(format!("{}{}: \"{}\"", indent, filename, text));
        self.entries.push(ManifestEntry {
            kind,
            filename,
            text: text.to_string(),
        });
    }
}

pub fn build_manifest(stories: &[Story]) -> Manifest {
    let mut manifest = Manifest::default();
    for story in stories {
        append_story(&mut manifest, story);
    }
    manifest
}

fn append_story(manifest: &mut Manifest, story: &Story) {
    let story_id = story.id();

    manifest.push(SEPARATOR);
    manifest.push(format!("STORY: {} - {}", story_id, story.title()));
    manifest.push(SEPARATOR);
    manifest.blank();

    manifest.push(DIALOGUE_HEADER);
    manifest.blank();

    for (act, steps) in story.acts() {
        manifest.push(format!("  ## {}:", act));
        // Non-dialogue steps still take an index slot.
        for (index, step) in steps.iter().enumerate() {
            if !step.is_dialogue() {
                continue;
            }
            let filename = dialogue_filename(story_id, act.name(), index, step.speaker());
            manifest.entry(EntryKind::Dialogue, "    ", filename, step.text());
        }
        manifest.blank();
    }

    manifest.blank();
    manifest.push(LIBRARY_HEADER);
    manifest.blank();

    let Some(library) = story.library() else {
        log::debug!("Story {} has no command library", story_id);
        manifest.push(NO_LIBRARY_NOTICE);
        manifest.blank();
        // Skips the trailing spacing other stories get.
        return;
    };

    append_library(manifest, story_id, library);

    manifest.blank();
    manifest.blank();
}

fn append_library(manifest: &mut Manifest, story_id: &str, library: &CommandLibrary) {
    for (key, group) in library.iter() {
        let group = match group {
            Some(group) if !group.is_empty() => group,
            _ => continue,
        };

        manifest.push(format!("  ## {}:", key));
        match group {
            CommandGroup::Flat(commands) => {
                for (i, command) in commands.iter().enumerate() {
                    let filename = flat_command_filename(story_id, key, i);
                    manifest.entry(EntryKind::Command, "    ", filename, command.text());
                }
            }
            CommandGroup::Grouped(groups) => {
                for (sub_key, commands) in groups.iter() {
                    manifest.push(format!("    ### {}:", sub_key));
                    for (i, command) in commands.iter().flatten().enumerate() {
                        let filename = grouped_command_filename(story_id, key, sub_key, i);
                        manifest.entry(EntryKind::Command, "      ", filename, command.text());
                    }
                }
            }
        }
        manifest.blank();
    }
}
