use std::sync::Arc;

use fluency_coach::application::services::{Narrator, ProblemGenerator};
use fluency_coach::domain::{ConversationMemory, EnglishLevel, PlaybackSpeed};

use crate::helpers::{
    MockAudioWorkspace, MockLlmClient, MockSpeechSynthesizer, conversation_profile,
};

#[tokio::test]
async fn given_instruction_when_generating_then_sentence_is_trimmed_and_spoken() {
    let llm = Arc::new(MockLlmClient::replying(
        conversation_profile(),
        &["  Could you send me the report by Friday?\n"],
    ));
    let synthesizer = Arc::new(MockSpeechSynthesizer::new());
    let narrator = Narrator::new(synthesizer.clone(), Arc::new(MockAudioWorkspace::new()));
    let generator = ProblemGenerator::new(llm.clone(), narrator);
    let mut memory = ConversationMemory::new(1000);
    let speed = PlaybackSpeed::try_from(0.8).unwrap();

    let generated = generator
        .generate(
            &ProblemGenerator::instruction_for(EnglishLevel::Intermediate),
            &mut memory,
            speed,
        )
        .await
        .unwrap();

    assert_eq!(
        generated.problem.text,
        "Could you send me the report by Friday?"
    );
    assert_eq!(generated.problem.audio, b"mock mp3".to_vec());
    assert_eq!(generated.playback, MockAudioWorkspace::playback_bytes(speed));
    assert_eq!(
        synthesizer.spoken(),
        vec!["Could you send me the report by Friday?".to_string()]
    );
}

#[tokio::test]
async fn given_previous_problem_when_generating_again_then_history_is_sent() {
    let llm = Arc::new(MockLlmClient::replying(
        conversation_profile(),
        &["First sentence.", "Second sentence."],
    ));
    let narrator = Narrator::new(
        Arc::new(MockSpeechSynthesizer::new()),
        Arc::new(MockAudioWorkspace::new()),
    );
    let generator = ProblemGenerator::new(llm.clone(), narrator);
    let instruction = ProblemGenerator::instruction_for(EnglishLevel::Beginner);
    let mut memory = ConversationMemory::new(1000);

    generator
        .generate(&instruction, &mut memory, PlaybackSpeed::default())
        .await
        .unwrap();
    generator
        .generate(&instruction, &mut memory, PlaybackSpeed::default())
        .await
        .unwrap();

    let second = &llm.requests()[1];
    assert!(second.iter().any(|m| m.content == "First sentence."));
    assert!(second[0].content.contains("beginner"));
}
