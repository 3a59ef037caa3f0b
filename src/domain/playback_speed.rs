use std::fmt;

/// Playback rate applied to synthesized speech. 1.0 is normal speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f32);

impl PlaybackSpeed {
    pub const OPTIONS: [f32; 6] = [2.0, 1.5, 1.2, 1.0, 0.8, 0.6];
    pub const NORMAL: PlaybackSpeed = PlaybackSpeed(1.0);

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_normal(&self) -> bool {
        self.0 == 1.0
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<f32> for PlaybackSpeed {
    type Error = String;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .iter()
            .find(|option| (**option - value).abs() < f32::EPSILON)
            .map(|option| Self(*option))
            .ok_or_else(|| {
                format!(
                    "Invalid playback speed: {}. Expected one of {:?}",
                    value,
                    Self::OPTIONS
                )
            })
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}
