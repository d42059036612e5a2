use serde::{Deserialize, Serialize};

pub const DETACHED_HEAD: &str = "Detached HEAD";

/// Capitalization used for toolbar and foldout labels.
///
/// macOS conventions use title case ("Current Branch"), other platforms use
/// sentence case ("Current branch").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCasing {
    Title,
    Sentence,
}

impl Default for LabelCasing {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Title
        } else {
            Self::Sentence
        }
    }
}

impl LabelCasing {
    pub fn pick(self, title: &'static str, sentence: &'static str) -> &'static str {
        match self {
            Self::Title => title,
            Self::Sentence => sentence,
        }
    }

    pub fn current_branch(self) -> &'static str {
        self.pick("Current Branch", "Current branch")
    }

    pub fn switching_to_branch(self) -> &'static str {
        self.pick("Switching to Branch", "Switching to branch")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_casing_capitalizes_every_word() {
        assert_eq!(LabelCasing::Title.current_branch(), "Current Branch");
        assert_eq!(LabelCasing::Title.switching_to_branch(), "Switching to Branch");
    }

    #[test]
    fn sentence_casing_capitalizes_first_word_only() {
        assert_eq!(LabelCasing::Sentence.current_branch(), "Current branch");
        assert_eq!(
            LabelCasing::Sentence.switching_to_branch(),
            "Switching to branch"
        );
    }
}
