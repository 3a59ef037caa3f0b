use fluency_coach::domain::{EnglishLevel, PlaybackSpeed, PracticeMode};

#[test]
fn given_mode_names_when_parsing_then_case_is_ignored() {
    assert_eq!(
        "Dictation".parse::<PracticeMode>(),
        Ok(PracticeMode::Dictation)
    );
    assert_eq!(
        "SHADOWING".parse::<PracticeMode>(),
        Ok(PracticeMode::Shadowing)
    );
}

#[test]
fn given_unknown_mode_when_parsing_then_returns_error() {
    assert!("karaoke".parse::<PracticeMode>().is_err());
}

#[test]
fn given_practice_modes_when_checking_problem_usage_then_only_conversation_is_free_talk() {
    assert!(!PracticeMode::Conversation.uses_problems());
    assert!(PracticeMode::Shadowing.uses_problems());
    assert!(PracticeMode::Dictation.uses_problems());
}

#[test]
fn given_default_speed_when_created_then_is_normal() {
    let speed = PlaybackSpeed::default();
    assert!(speed.is_normal());
    assert_eq!(speed.value(), 1.0);
}

#[test]
fn given_listed_speed_when_converting_then_accepted() {
    for option in PlaybackSpeed::OPTIONS {
        let speed = PlaybackSpeed::try_from(option).unwrap();
        assert_eq!(speed.value(), option);
    }
}

#[test]
fn given_unlisted_speed_when_converting_then_rejected() {
    assert!(PlaybackSpeed::try_from(3.0).is_err());
    assert!(PlaybackSpeed::try_from(0.0).is_err());
}

#[test]
fn given_default_level_when_created_then_beginner() {
    assert_eq!(EnglishLevel::default(), EnglishLevel::Beginner);
    assert_eq!(
        "advanced".parse::<EnglishLevel>(),
        Ok(EnglishLevel::Advanced)
    );
}
