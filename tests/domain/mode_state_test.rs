use fluency_coach::domain::{ModeEvent, ModeState, PracticeMode};

#[test]
fn given_idle_conversation_when_started_then_awaits_audio_input() {
    let next = ModeState::Idle.transition(PracticeMode::Conversation, ModeEvent::Started);
    assert_eq!(next, Ok(ModeState::AwaitingAudioInput));
}

#[test]
fn given_conversation_awaiting_audio_when_reply_spoken_then_stays_awaiting() {
    let next = ModeState::AwaitingAudioInput
        .transition(PracticeMode::Conversation, ModeEvent::ReplySpoken);
    assert_eq!(next, Ok(ModeState::AwaitingAudioInput));
}

#[test]
fn given_shadowing_when_problem_played_from_idle_or_result_then_awaits_audio() {
    for from in [ModeState::Idle, ModeState::DisplayingResult] {
        let next = from.transition(PracticeMode::Shadowing, ModeEvent::ProblemPlayed);
        assert_eq!(next, Ok(ModeState::AwaitingAudioInput));
    }
}

#[test]
fn given_dictation_when_problem_played_then_awaits_dictation_submission() {
    for from in [ModeState::Idle, ModeState::DisplayingResult] {
        let next = from.transition(PracticeMode::Dictation, ModeEvent::ProblemPlayed);
        assert_eq!(next, Ok(ModeState::AwaitingDictationSubmission));
    }
}

#[test]
fn given_practice_mode_when_answer_received_and_evaluated_then_displays_result() {
    let scoring = ModeState::AwaitingDictationSubmission
        .transition(PracticeMode::Dictation, ModeEvent::AnswerReceived)
        .unwrap();
    assert_eq!(scoring, ModeState::Scoring);

    let result = scoring
        .transition(PracticeMode::Dictation, ModeEvent::Evaluated)
        .unwrap();
    assert_eq!(result, ModeState::DisplayingResult);
}

#[test]
fn given_any_state_when_paused_or_mode_changed_then_returns_to_idle() {
    let states = [
        ModeState::Idle,
        ModeState::AwaitingAudioInput,
        ModeState::AwaitingDictationSubmission,
        ModeState::Scoring,
        ModeState::DisplayingResult,
    ];
    for mode in PracticeMode::ALL {
        for from in states {
            assert_eq!(from.transition(mode, ModeEvent::Paused), Ok(ModeState::Idle));
            assert_eq!(
                from.transition(mode, ModeEvent::ModeChanged),
                Ok(ModeState::Idle)
            );
        }
    }
}

#[test]
fn given_dictation_awaiting_submission_when_reply_spoken_then_rejected() {
    let error = ModeState::AwaitingDictationSubmission
        .transition(PracticeMode::Dictation, ModeEvent::ReplySpoken)
        .unwrap_err();

    assert_eq!(error.mode, PracticeMode::Dictation);
    assert_eq!(error.from, ModeState::AwaitingDictationSubmission);
    assert_eq!(error.event, ModeEvent::ReplySpoken);
    assert_eq!(
        error.to_string(),
        "reply_spoken is not allowed while dictation is awaiting_dictation_submission"
    );
}

#[test]
fn given_shadowing_awaiting_audio_when_problem_played_again_then_rejected() {
    let next = ModeState::AwaitingAudioInput
        .transition(PracticeMode::Shadowing, ModeEvent::ProblemPlayed);
    assert!(next.is_err());
}

#[test]
fn given_conversation_when_evaluated_then_rejected() {
    let next = ModeState::Scoring.transition(PracticeMode::Conversation, ModeEvent::Evaluated);
    assert!(next.is_err());
}

#[test]
fn given_default_state_when_created_then_idle() {
    assert_eq!(ModeState::default(), ModeState::Idle);
}
