//! Audio filenames derived from story content.
//!
//! Indices are positions within the immediate sequence (an act, a flat
//! command list, or one sub-key of a grouped list) and restart for each.

fn underscored(s: &str) -> String {
    s.replace(' ', "_")
}

pub fn dialogue_filename(story_id: &str, act_name: &str, index: usize, speaker: &str) -> String {
    format!(
        "{}_{}_{}_{}.mp3",
        story_id,
        act_name,
        index,
        underscored(speaker)
    )
}

pub fn flat_command_filename(story_id: &str, key: &str, index: usize) -> String {
    format!("{}_lib_{}_{}.mp3", story_id, key, index)
}

pub fn grouped_command_filename(story_id: &str, key: &str, sub_key: &str, index: usize) -> String {
    format!(
        "{}_lib_{}_{}_{}.mp3",
        story_id,
        key,
        underscored(sub_key),
        index
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_filename() {
        assert_eq!(
            dialogue_filename("s1", "act1Setup", 0, "Narrator"),
            "s1_act1Setup_0_Narrator.mp3"
        );
        assert_eq!(
            dialogue_filename("s1", "act2Core", 3, "Old Man Jenkins"),
            "s1_act2Core_3_Old_Man_Jenkins.mp3"
        );
    }

    #[test]
    fn test_command_filenames() {
        assert_eq!(flat_command_filename("s1", "praise", 2), "s1_lib_praise_2.mp3");
        assert_eq!(
            grouped_command_filename("s1", "toy_use", "vibrator", 0),
            "s1_lib_toy_use_vibrator_0.mp3"
        );
        assert_eq!(
            grouped_command_filename("s1", "aftercare", "after the game", 1),
            "s1_lib_aftercare_after_the_game_1.mp3"
        );
    }

    #[test]
    fn test_only_spaces_are_replaced() {
        // Library keys are used as-is; only speakers and sub-keys are underscored.
        assert_eq!(flat_command_filename("s1", "two words", 0), "s1_lib_two words_0.mp3");
        assert_eq!(
            dialogue_filename("s1", "act1Setup", 0, "Dr.\tWho"),
            "s1_act1Setup_0_Dr.\tWho.mp3"
        );
    }
}
