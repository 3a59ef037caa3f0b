use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnglishLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl EnglishLevel {
    pub const ALL: [EnglishLevel; 3] = [
        EnglishLevel::Beginner,
        EnglishLevel::Intermediate,
        EnglishLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnglishLevel::Beginner => "beginner",
            EnglishLevel::Intermediate => "intermediate",
            EnglishLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for EnglishLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(EnglishLevel::Beginner),
            "intermediate" => Ok(EnglishLevel::Intermediate),
            "advanced" => Ok(EnglishLevel::Advanced),
            other => Err(format!(
                "Invalid English level: {}. Expected: beginner, intermediate, or advanced",
                other
            )),
        }
    }
}

impl fmt::Display for EnglishLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
