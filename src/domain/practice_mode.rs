use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeMode {
    Conversation,
    Shadowing,
    Dictation,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [
        PracticeMode::Conversation,
        PracticeMode::Shadowing,
        PracticeMode::Dictation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeMode::Conversation => "conversation",
            PracticeMode::Shadowing => "shadowing",
            PracticeMode::Dictation => "dictation",
        }
    }

    /// Shadowing and dictation both revolve around a generated problem sentence.
    pub fn uses_problems(&self) -> bool {
        matches!(self, PracticeMode::Shadowing | PracticeMode::Dictation)
    }
}

impl FromStr for PracticeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conversation" => Ok(PracticeMode::Conversation),
            "shadowing" => Ok(PracticeMode::Shadowing),
            "dictation" => Ok(PracticeMode::Dictation),
            other => Err(format!(
                "Invalid practice mode: {}. Expected: conversation, shadowing, or dictation",
                other
            )),
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
