/// A generated practice sentence together with its synthesized speech (MP3).
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub text: String,
    pub audio: Vec<u8>,
}

impl Problem {
    pub fn new(text: String, audio: Vec<u8>) -> Self {
        Self { text, audio }
    }
}
