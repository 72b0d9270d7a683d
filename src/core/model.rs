use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

pub const UNKNOWN_STORY_ID: &str = "unknown_story";
pub const UNTITLED: &str = "No Title";
pub const NO_SPEAKER: &str = "NO_SPEAKER";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Story {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "act1Setup")]
    pub act1_setup: Option<Vec<Step>>,
    #[serde(default, rename = "act2Core")]
    pub act2_core: Option<Vec<Step>>,
    #[serde(default, rename = "act3Aftermath")]
    pub act3_aftermath: Option<Vec<Step>>,
    #[serde(default, rename = "aftercareScript")]
    pub aftercare_script: Option<Vec<Step>>,
    #[serde(default, rename = "commandLibrary")]
    pub command_library: Option<CommandLibrary>,
}

impl Story {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_STORY_ID)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn act(&self, act: Act) -> Option<&[Step]> {
        let steps = match act {
            Act::Act1Setup => &self.act1_setup,
            Act::Act2Core => &self.act2_core,
            Act::Act3Aftermath => &self.act3_aftermath,
            Act::AftercareScript => &self.aftercare_script,
        };
        steps.as_deref()
    }

    /// Acts with at least one step, in narrative order.
    pub fn acts(&self) -> impl Iterator<Item = (Act, &[Step])> + '_ {
        Act::ALL.into_iter().filter_map(move |act| match self.act(act) {
            Some(steps) if !steps.is_empty() => Some((act, steps)),
            _ => None,
        })
    }

    /// The command library, or `None` when it is missing or has no keys.
    pub fn library(&self) -> Option<&CommandLibrary> {
        self.command_library.as_ref().filter(|lib| !lib.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Act {
    Act1Setup,
    Act2Core,
    Act3Aftermath,
    AftercareScript,
}

impl Act {
    pub const ALL: [Act; 4] = [
        Act::Act1Setup,
        Act::Act2Core,
        Act::Act3Aftermath,
        Act::AftercareScript,
    ];

    /// Field name in stories.json, also used in derived filenames.
    pub fn name(self) -> &'static str {
        match self {
            Act::Act1Setup => "act1Setup",
            Act::Act2Core => "act2Core",
            Act::Act3Aftermath => "act3Aftermath",
            Act::AftercareScript => "aftercareScript",
        }
    }
}

impl fmt::Display for Act {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Step {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    speaker: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl Step {
    pub fn is_dialogue(&self) -> bool {
        self.kind.as_deref() == Some("dialogue")
    }

    pub fn speaker(&self) -> &str {
        self.speaker.as_deref().unwrap_or(NO_SPEAKER)
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Command {
    #[serde(default)]
    text: Option<String>,
}

impl Command {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// A library value is either a plain list of commands or a map of
/// sub-category to list (e.g. `toy_use`, `aftercare`).
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum CommandGroup {
    Flat(Vec<Command>),
    Grouped(OrderedMap<Option<Vec<Command>>>),
}

impl CommandGroup {
    pub fn is_empty(&self) -> bool {
        match self {
            CommandGroup::Flat(commands) => commands.is_empty(),
            CommandGroup::Grouped(groups) => groups.is_empty(),
        }
    }
}

/// Null values are kept so the builder can skip them in place.
pub type CommandLibrary = OrderedMap<Option<CommandGroup>>;

/// JSON object decoded with its keys kept in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<T>(Vec<(String, T)>);

impl<T> OrderedMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<(String, T)>> for OrderedMap<T> {
    fn from(entries: Vec<(String, T)>) -> Self {
        Self(entries)
    }
}

struct OrderedMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<T> {
    type Value = OrderedMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            entries.push((key, value));
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() -> anyhow::Result<()> {
        let story: Story = serde_json::from_str(r#"{"act1Setup": [{"type": "dialogue"}]}"#)?;
        assert_eq!(story.id(), "unknown_story");
        assert_eq!(story.title(), "No Title");

        let step = &story.act1_setup.as_ref().unwrap()[0];
        assert!(step.is_dialogue());
        assert_eq!(step.speaker(), "NO_SPEAKER");
        assert_eq!(step.text(), "");
        Ok(())
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() -> anyhow::Result<()> {
        let story: Story = serde_json::from_str(
            r#"{"id": null, "title": null, "act2Core": null, "commandLibrary": null}"#,
        )?;
        assert_eq!(story.id(), "unknown_story");
        assert_eq!(story.title(), "No Title");
        assert!(story.act(Act::Act2Core).is_none());
        assert!(story.library().is_none());
        Ok(())
    }

    #[test]
    fn test_acts_skip_empty_and_keep_order() -> anyhow::Result<()> {
        let story: Story = serde_json::from_str(
            r#"{
                "aftercareScript": [{"type": "dialogue", "text": "rest"}],
                "act2Core": [],
                "act1Setup": [{"type": "action", "tag": "lights"}]
            }"#,
        )?;
        let acts: Vec<Act> = story.acts().map(|(act, _)| act).collect();
        assert_eq!(acts, vec![Act::Act1Setup, Act::AftercareScript]);
        Ok(())
    }

    #[test]
    fn test_library_keeps_document_order() -> anyhow::Result<()> {
        let story: Story = serde_json::from_str(
            r#"{"commandLibrary": {
                "praise": [{"text": "good"}],
                "aftercare": {"verbal": [{"text": "well done"}], "physical": null},
                "instruction": null
            }}"#,
        )?;
        let library = story.library().unwrap();
        let keys: Vec<&str> = library.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["praise", "aftercare", "instruction"]);

        let groups: Vec<_> = library.iter().map(|(_, v)| v.clone()).collect();
        assert!(matches!(groups[0], Some(CommandGroup::Flat(ref c)) if c[0].text() == "good"));
        match &groups[1] {
            Some(CommandGroup::Grouped(sub)) => {
                let sub_keys: Vec<&str> = sub.iter().map(|(k, _)| k).collect();
                assert_eq!(sub_keys, vec!["verbal", "physical"]);
            }
            other => panic!("expected grouped library value, got {:?}", other),
        }
        assert!(groups[2].is_none());
        Ok(())
    }

    #[test]
    fn test_empty_library_reads_as_absent() -> anyhow::Result<()> {
        let story: Story = serde_json::from_str(r#"{"commandLibrary": {}}"#)?;
        assert!(story.command_library.is_some());
        assert!(story.library().is_none());
        Ok(())
    }
}
