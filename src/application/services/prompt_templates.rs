//! Instruction templates for the chat configurations.
//!
//! Placeholders are written `{name}` and filled by [`render`]; their names
//! are part of the template contract.

pub const CONVERSATION_SYSTEM_TEMPLATE: &str = "\
You are a friendly native English speaker helping a learner practice everyday conversation.
- Reply naturally in English, in two or three short sentences.
- If the learner's sentence contains a grammatical mistake, first restate it correctly in one sentence, then continue the conversation.
- Keep the conversation going by ending with a simple question about the topic.
- Avoid rare idioms and technical vocabulary.";

/// Placeholder: `{english_level}`.
pub const PROBLEM_SYSTEM_TEMPLATE: &str = "\
You create English practice sentences for a {english_level} learner.
- Produce exactly one natural English sentence of roughly 15 words that people use in daily life or at work.
- Vary the topic and grammar from the sentences you produced before.
- Output only the sentence itself, without quotes, numbering or explanation.";

/// Placeholders: `{llm_text}` (the problem) and `{user_text}` (the learner's answer).
pub const EVALUATION_SYSTEM_TEMPLATE: &str = "\
You are an English pronunciation and listening coach.
Compare the learner's answer with the problem sentence and evaluate it.

[Problem sentence]
{llm_text}

[Learner's answer]
{user_text}

Evaluate using these rules:
1. Accuracy: point out every missing, extra or different word.
2. Grammar and wording: explain each difference briefly.
3. Finish with one sentence of encouragement and one concrete tip for the next attempt.
Ignore differences in capitalization and punctuation.
Answer in this format:
[Evaluation]
[Advice]";

pub const EVALUATION_INSTRUCTION: &str =
    "Evaluate the problem sentence and the learner's answer according to the rules above.";

/// Placeholders: `{summary}` (running summary) and `{new_lines}` (pruned turns).
pub const SUMMARY_TEMPLATE: &str = "\
Progressively summarize the lines of conversation provided, adding onto the previous summary and returning a new summary.

Current summary:
{summary}

New lines of conversation:
{new_lines}

New summary:";

/// Fills `{name}` placeholders in one pass. Inserted values are never
/// rescanned, so learner text containing braces is kept as typed. Unknown
/// placeholders are left in place.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let filled = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (close, *value))
        });

        match filled {
            Some((close, value)) => {
                output.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}
