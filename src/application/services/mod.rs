mod conversation_chain;
mod evaluator;
mod narrator;
mod practice_controller;
mod problem_generator;
pub mod prompt_templates;
mod token_counter;
mod transcription_service;

pub use conversation_chain::{ConversationChain, prune_memory};
pub use evaluator::Evaluator;
pub use narrator::{Narrator, SpeechError, Utterance};
pub use practice_controller::{ControllerError, PracticeController, Preferences, SessionDelta};
pub use problem_generator::{GeneratedProblem, ProblemGenerationError, ProblemGenerator};
pub use token_counter::count_tokens;
pub use transcription_service::TranscriptionService;
