use std::sync::LazyLock;

use tiktoken_rs::CoreBPE;

const CHARS_PER_TOKEN: usize = 4;

/// cl100k_base, the encoding used by the gpt-4o chat models.
static ENCODING: LazyLock<Option<CoreBPE>> = LazyLock::new(|| match tiktoken_rs::cl100k_base() {
    Ok(bpe) => Some(bpe),
    Err(e) => {
        tracing::error!(error = %e, "cl100k_base unavailable, estimating token counts");
        None
    }
});

/// Token count of `text` as the chat model sees it. Falls back to a
/// character estimate if the encoding could not be loaded.
pub fn count_tokens(text: &str) -> usize {
    match ENCODING.as_ref() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => text.chars().count().div_ceil(CHARS_PER_TOKEN),
    }
}
