use chrono::{DateTime, Utc};

use super::{
    ConversationMemory, EnglishLevel, MessageLog, ModeEvent, ModeProgress, ModeState,
    PlaybackSpeed, PracticeMode, Problem, SessionId, TransitionError,
};

/// Everything one learner's practice session owns, from creation until the
/// session is closed.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub mode: Option<PracticeMode>,
    pub speed: PlaybackSpeed,
    pub level: EnglishLevel,
    pub state: ModeState,
    pub messages: MessageLog,
    pub problem: Option<Problem>,
    pub shadowing: ModeProgress,
    pub dictation: ModeProgress,
    pub memory: ConversationMemory,
    /// Problem-generation instruction, built on a mode's first problem.
    pub problem_instruction: Option<String>,
    /// WAV bytes of the most recent playback, kept for replay.
    pub last_playback: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(memory_token_limit: usize) -> Self {
        Self {
            id: SessionId::new(),
            mode: None,
            speed: PlaybackSpeed::default(),
            level: EnglishLevel::default(),
            state: ModeState::Idle,
            messages: MessageLog::new(),
            problem: None,
            shadowing: ModeProgress::default(),
            dictation: ModeProgress::default(),
            memory: ConversationMemory::new(memory_token_limit),
            problem_instruction: None,
            last_playback: None,
            created_at: Utc::now(),
        }
    }

    /// Switches to `mode`. Re-selecting the current mode changes nothing.
    ///
    /// Returns `true` when the mode actually changed.
    pub fn select_mode(&mut self, mode: PracticeMode) -> bool {
        if self.mode == Some(mode) {
            return false;
        }

        self.state = self
            .state
            .transition(mode, ModeEvent::ModeChanged)
            .unwrap_or(ModeState::Idle);
        self.shadowing.count = 0;
        self.dictation.count = 0;
        if let Some(progress) = self.progress_mut(mode) {
            progress.first = true;
        }
        self.mode = Some(mode);
        true
    }

    pub fn select_level(&mut self, level: EnglishLevel) {
        if self.level != level {
            self.level = level;
            self.problem_instruction = None;
        }
    }

    /// Validates `event` against the transition table without applying it.
    pub fn check(
        &self,
        mode: PracticeMode,
        event: ModeEvent,
    ) -> Result<ModeState, TransitionError> {
        self.state.transition(mode, event)
    }

    pub fn apply(&mut self, mode: PracticeMode, event: ModeEvent) -> Result<(), TransitionError> {
        self.state = self.state.transition(mode, event)?;
        Ok(())
    }

    pub fn pause(&mut self) {
        if let Some(mode) = self.mode {
            self.state = self
                .state
                .transition(mode, ModeEvent::Paused)
                .unwrap_or(ModeState::Idle);
        }
    }

    pub fn progress(&self, mode: PracticeMode) -> Option<&ModeProgress> {
        match mode {
            PracticeMode::Shadowing => Some(&self.shadowing),
            PracticeMode::Dictation => Some(&self.dictation),
            PracticeMode::Conversation => None,
        }
    }

    pub fn progress_mut(&mut self, mode: PracticeMode) -> Option<&mut ModeProgress> {
        match mode {
            PracticeMode::Shadowing => Some(&mut self.shadowing),
            PracticeMode::Dictation => Some(&mut self.dictation),
            PracticeMode::Conversation => None,
        }
    }

    pub fn started(&self) -> bool {
        self.state != ModeState::Idle
    }

    pub fn chat_open(&self) -> bool {
        self.state == ModeState::AwaitingDictationSubmission
    }

    pub fn next_problem_available(&self) -> bool {
        self.state == ModeState::DisplayingResult
            && self.mode.is_some_and(|mode| mode.uses_problems())
    }
}
