use std::sync::Arc;

use crate::application::ports::{
    AudioError, AudioWorkspace, LlmClient, LlmClientError, SpeechSynthesizer, TranscriptionEngine,
    TranscriptionError,
};
use crate::domain::{
    EnglishLevel, Message, ModeEvent, PlaybackSpeed, PracticeMode, Session, TransitionError,
};

use super::conversation_chain::ConversationChain;
use super::evaluator::Evaluator;
use super::narrator::{Narrator, SpeechError};
use super::problem_generator::{ProblemGenerationError, ProblemGenerator};
use super::prompt_templates::CONVERSATION_SYSTEM_TEMPLATE;
use super::transcription_service::TranscriptionService;

const DEFAULT_MEMORY_TOKEN_LIMIT: usize = 1000;

/// Selector values sent with a preferences update. `None` leaves a value as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preferences {
    pub mode: Option<PracticeMode>,
    pub speed: Option<PlaybackSpeed>,
    pub level: Option<EnglishLevel>,
}

/// What one action changed, beyond the session snapshot itself.
#[derive(Debug, Clone, Default)]
pub struct SessionDelta {
    /// Transcript entries appended by this action, in order.
    pub messages: Vec<Message>,
    /// WAV audio to play in the browser.
    pub playback: Option<Vec<u8>>,
}

/// Drives a session through its practice mode, one user action at a time.
///
/// Every action validates its guard against the session's
/// [`ModeState`](crate::domain::ModeState) before any external service is
/// called, so a rejected action leaves the session untouched. A service
/// failure also leaves the state where it was.
pub struct PracticeController {
    conversation_llm: Arc<dyn LlmClient>,
    conversation_chain: ConversationChain,
    problem_generator: ProblemGenerator,
    evaluator: Evaluator,
    transcription: TranscriptionService,
    narrator: Narrator,
    audio: Arc<dyn AudioWorkspace>,
}

impl PracticeController {
    pub fn new(
        conversation_llm: Arc<dyn LlmClient>,
        evaluation_llm: Arc<dyn LlmClient>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio: Arc<dyn AudioWorkspace>,
    ) -> Self {
        let narrator = Narrator::new(synthesizer, Arc::clone(&audio));
        Self {
            conversation_chain: ConversationChain::new(CONVERSATION_SYSTEM_TEMPLATE),
            problem_generator: ProblemGenerator::new(
                Arc::clone(&conversation_llm),
                narrator.clone(),
            ),
            evaluator: Evaluator::new(evaluation_llm),
            transcription: TranscriptionService::new(transcription_engine),
            narrator,
            audio,
            conversation_llm,
        }
    }

    pub fn new_session(&self) -> Session {
        let limit = self
            .conversation_llm
            .profile()
            .max_history_tokens()
            .unwrap_or(DEFAULT_MEMORY_TOKEN_LIMIT);
        Session::new(limit)
    }

    pub fn update_preferences(&self, session: &mut Session, preferences: Preferences) {
        if let Some(speed) = preferences.speed {
            session.speed = speed;
        }
        if let Some(level) = preferences.level {
            session.select_level(level);
        }
        if let Some(mode) = preferences.mode {
            if session.select_mode(mode) {
                tracing::info!(session_id = %session.id, mode = %mode, "Practice mode changed");
            }
        }
    }

    pub async fn start(&self, session: &mut Session) -> Result<SessionDelta, ControllerError> {
        let mode = session.mode.ok_or(ControllerError::ModeNotSelected)?;

        if session.started() {
            return Err(ControllerError::AlreadyStarted);
        }

        tracing::info!(session_id = %session.id, mode = %mode, "Practice started");

        match mode {
            PracticeMode::Conversation => {
                session.apply(mode, ModeEvent::Started)?;
                Ok(SessionDelta::default())
            }
            PracticeMode::Shadowing | PracticeMode::Dictation => {
                self.play_problem(session, mode).await
            }
        }
    }

    pub fn pause(&self, session: &mut Session) {
        session.pause();
        tracing::info!(session_id = %session.id, "Practice paused");
    }

    /// The "next problem" button shown after a shadowing or dictation result.
    pub async fn request_problem(
        &self,
        session: &mut Session,
    ) -> Result<SessionDelta, ControllerError> {
        let mode = session.mode.ok_or(ControllerError::ModeNotSelected)?;

        if !session.next_problem_available() {
            return Err(out_of_order(session, mode, ModeEvent::ProblemPlayed));
        }

        self.play_problem(session, mode).await
    }

    /// A finished microphone recording: a conversation turn or a shadowing answer.
    pub async fn submit_audio(
        &self,
        session: &mut Session,
        recording: &[u8],
    ) -> Result<SessionDelta, ControllerError> {
        let mode = session.mode.ok_or(ControllerError::ModeNotSelected)?;

        if recording.is_empty() {
            return Err(ControllerError::NoAudioCaptured);
        }

        match mode {
            PracticeMode::Conversation => {
                session.check(mode, ModeEvent::ReplySpoken)?;
                self.converse(session, mode, recording).await
            }
            PracticeMode::Shadowing => {
                session.check(mode, ModeEvent::AnswerReceived)?;
                let transcript = self.transcribe(recording).await?;
                self.score(session, mode, &transcript).await
            }
            PracticeMode::Dictation => {
                Err(out_of_order(session, mode, ModeEvent::AnswerReceived))
            }
        }
    }

    /// A typed dictation answer.
    pub async fn submit_chat(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<SessionDelta, ControllerError> {
        let mode = session.mode.ok_or(ControllerError::ModeNotSelected)?;

        if mode != PracticeMode::Dictation || !session.chat_open() {
            tracing::debug!(
                session_id = %session.id,
                state = %session.state,
                "Chat input ignored"
            );
            return Err(out_of_order(session, mode, ModeEvent::AnswerReceived));
        }

        let answer = text.trim();
        if answer.is_empty() {
            return Err(ControllerError::EmptyAnswer);
        }

        self.score(session, mode, answer).await
    }

    async fn play_problem(
        &self,
        session: &mut Session,
        mode: PracticeMode,
    ) -> Result<SessionDelta, ControllerError> {
        session.check(mode, ModeEvent::ProblemPlayed)?;

        let first = session.progress(mode).is_some_and(|progress| progress.first);
        let instruction = match session.problem_instruction.clone() {
            Some(instruction) if !first => instruction,
            _ => ProblemGenerator::instruction_for(session.level),
        };

        let mut memory = session.memory.clone();
        let generated = self
            .problem_generator
            .generate(&instruction, &mut memory, session.speed)
            .await?;

        session.memory = memory;
        session.problem_instruction = Some(instruction);
        if let Some(progress) = session.progress_mut(mode) {
            progress.first = false;
        }
        session.problem = Some(generated.problem);
        session.last_playback = Some(generated.playback.clone());
        session.apply(mode, ModeEvent::ProblemPlayed)?;

        tracing::info!(
            session_id = %session.id,
            mode = %mode,
            state = %session.state,
            "Problem played"
        );

        Ok(SessionDelta {
            messages: Vec::new(),
            playback: Some(generated.playback),
        })
    }

    async fn converse(
        &self,
        session: &mut Session,
        mode: PracticeMode,
        recording: &[u8],
    ) -> Result<SessionDelta, ControllerError> {
        let transcript = self.transcribe(recording).await?;

        let mut memory = session.memory.clone();
        let reply = self
            .conversation_chain
            .predict(self.conversation_llm.as_ref(), &mut memory, &transcript)
            .await?;

        let utterance = self.narrator.speak(&reply, session.speed).await?;

        session.memory = memory;
        let messages = vec![Message::user(transcript), Message::assistant(reply)];
        session.messages.extend(messages.clone());
        session.last_playback = Some(utterance.playback.clone());
        session.apply(mode, ModeEvent::ReplySpoken)?;

        tracing::info!(session_id = %session.id, "Conversation turn completed");

        Ok(SessionDelta {
            messages,
            playback: Some(utterance.playback),
        })
    }

    async fn transcribe(&self, recording: &[u8]) -> Result<String, ControllerError> {
        let workspace = Arc::clone(&self.audio);
        let recording = recording.to_vec();
        let stored = tokio::task::spawn_blocking(move || workspace.store_recording(&recording))
            .await
            .map_err(|e| AudioError::TaskFailed(format!("task join error: {e}")))?;
        let path = match stored {
            Ok(path) => path,
            Err(AudioError::NoSamples) => return Err(ControllerError::NoAudioCaptured),
            Err(e) => return Err(e.into()),
        };
        let transcript = self.transcription.transcribe_file(&path).await?;
        Ok(transcript)
    }

    async fn score(
        &self,
        session: &mut Session,
        mode: PracticeMode,
        answer: &str,
    ) -> Result<SessionDelta, ControllerError> {
        let problem = session
            .problem
            .as_ref()
            .map(|problem| problem.text.clone())
            .ok_or(ControllerError::NoProblem)?;

        let previous = session.state;
        session.apply(mode, ModeEvent::AnswerReceived)?;

        let evaluation = match self.evaluator.evaluate(&problem, answer).await {
            Ok(evaluation) => evaluation,
            Err(e) => {
                session.state = previous;
                return Err(e.into());
            }
        };

        let messages = vec![
            Message::assistant(problem),
            Message::user(answer),
            Message::assistant(evaluation),
            Message::divider(),
        ];
        session.messages.extend(messages.clone());
        if let Some(progress) = session.progress_mut(mode) {
            progress.count += 1;
        }
        session.apply(mode, ModeEvent::Evaluated)?;

        tracing::info!(
            session_id = %session.id,
            mode = %mode,
            rounds = session.progress(mode).map(|p| p.count).unwrap_or_default(),
            "Answer scored"
        );

        Ok(SessionDelta {
            messages,
            playback: None,
        })
    }
}

fn out_of_order(session: &Session, mode: PracticeMode, event: ModeEvent) -> ControllerError {
    ControllerError::OutOfOrder(TransitionError {
        mode,
        from: session.state,
        event,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("no practice mode selected")]
    ModeNotSelected,
    #[error("practice already started")]
    AlreadyStarted,
    #[error("no audio captured")]
    NoAudioCaptured,
    #[error("empty answer")]
    EmptyAnswer,
    #[error("no current problem")]
    NoProblem,
    #[error("out of order: {0}")]
    OutOfOrder(#[from] TransitionError),
    #[error("chat: {0}")]
    Chat(#[from] LlmClientError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("speech: {0}")]
    Speech(#[from] SpeechError),
    #[error("problem generation: {0}")]
    ProblemGeneration(#[from] ProblemGenerationError),
    #[error("audio: {0}")]
    Audio(#[from] AudioError),
}

impl ControllerError {
    /// Intentional early exits, as opposed to failures of an external service.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ControllerError::ModeNotSelected
                | ControllerError::AlreadyStarted
                | ControllerError::NoAudioCaptured
                | ControllerError::EmptyAnswer
                | ControllerError::NoProblem
                | ControllerError::OutOfOrder(_)
        )
    }
}
