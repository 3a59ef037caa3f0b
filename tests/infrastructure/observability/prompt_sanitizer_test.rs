use fluency_coach::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_for_log(""), "[EMPTY]");
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_transcript_when_sanitizing_then_returns_unchanged() {
    let text = "I would like a cup of tea.";
    assert_eq!(sanitize_for_log(text), text);
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_length() {
    let text = "a".repeat(150);
    let result = sanitize_for_log(&text);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "こんにちは".repeat(30);
    let result = sanitize_for_log(&text);
    assert!(result.contains("(150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_for_log("Authorization: Bearer sk-abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_for_log("Send request with api_key=secret123");
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}
