use std::fmt;

use super::PracticeMode;

/// Where a session stands inside the selected practice mode.
///
/// ```text
/// conversation: Idle ──Started──▶ AwaitingAudioInput ──ReplySpoken──▶ AwaitingAudioInput
/// shadowing:    Idle | DisplayingResult ──ProblemPlayed──▶ AwaitingAudioInput
///               AwaitingAudioInput ──AnswerReceived──▶ Scoring ──Evaluated──▶ DisplayingResult
/// dictation:    Idle | DisplayingResult ──ProblemPlayed──▶ AwaitingDictationSubmission
///               AwaitingDictationSubmission ──AnswerReceived──▶ Scoring ──Evaluated──▶ DisplayingResult
/// any ──Paused | ModeChanged──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeState {
    #[default]
    Idle,
    AwaitingAudioInput,
    AwaitingDictationSubmission,
    Scoring,
    DisplayingResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeEvent {
    Started,
    ReplySpoken,
    ProblemPlayed,
    AnswerReceived,
    Evaluated,
    Paused,
    ModeChanged,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{event} is not allowed while {mode} is {from}")]
pub struct TransitionError {
    pub mode: PracticeMode,
    pub from: ModeState,
    pub event: ModeEvent,
}

impl ModeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeState::Idle => "idle",
            ModeState::AwaitingAudioInput => "awaiting_audio_input",
            ModeState::AwaitingDictationSubmission => "awaiting_dictation_submission",
            ModeState::Scoring => "scoring",
            ModeState::DisplayingResult => "displaying_result",
        }
    }

    pub fn transition(
        self,
        mode: PracticeMode,
        event: ModeEvent,
    ) -> Result<ModeState, TransitionError> {
        use ModeEvent::*;
        use ModeState::*;
        use PracticeMode::*;

        let next = match (mode, self, event) {
            (_, _, Paused | ModeChanged) => Some(Idle),

            (Conversation, Idle, Started) => Some(AwaitingAudioInput),
            (Conversation, AwaitingAudioInput, ReplySpoken) => Some(AwaitingAudioInput),

            (Shadowing, Idle | DisplayingResult, ProblemPlayed) => Some(AwaitingAudioInput),
            (Shadowing, AwaitingAudioInput, AnswerReceived) => Some(Scoring),

            (Dictation, Idle | DisplayingResult, ProblemPlayed) => {
                Some(AwaitingDictationSubmission)
            }
            (Dictation, AwaitingDictationSubmission, AnswerReceived) => Some(Scoring),

            (Shadowing | Dictation, Scoring, Evaluated) => Some(DisplayingResult),

            _ => None,
        };

        next.ok_or(TransitionError {
            mode,
            from: self,
            event,
        })
    }
}

impl ModeEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeEvent::Started => "started",
            ModeEvent::ReplySpoken => "reply_spoken",
            ModeEvent::ProblemPlayed => "problem_played",
            ModeEvent::AnswerReceived => "answer_received",
            ModeEvent::Evaluated => "evaluated",
            ModeEvent::Paused => "paused",
            ModeEvent::ModeChanged => "mode_changed",
        }
    }
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ModeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
