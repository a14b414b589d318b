//! Splitting model output into script source and explanation.

use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;
use vibecoder_context::StaticContext;

/// Marker identifying an appended helper library section.
pub const HELPER_MARKER: &str = "GEMINI HELPER LIBRARY";

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[^\n`]*\n(.*?)```").expect("Valid fence regex"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("Valid blank-run regex"));

static CODE_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)\b(?:function|const|let|var|class|import|export|if|for|while|switch|return)\b|(?:^|\s)//|/\*",
    )
    .expect("Valid code-token regex")
});

/// Model output separated into code and prose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SplitResponse {
    /// Script source
    code: String,
    /// Accompanying explanation
    explanation: String,
}

impl SplitResponse {
    /// Consume into `(code, explanation)`.
    pub fn into_parts(self) -> (String, String) {
        (self.code, self.explanation)
    }
}

/// Split raw model text into code and explanation.
///
/// Every non-empty fenced block is extracted, trimmed, and joined in source
/// order with a blank line between blocks. The explanation is the remaining text with runs
/// of blank lines collapsed. Without fences, text that looks like code becomes
/// the code and anything else becomes the explanation.
///
/// # Examples
///
/// ```
/// use vibecoder_prompt::split_response;
///
/// let split = split_response("```js\nfunction send(){}\n``` \nThis sends an email.");
/// assert_eq!(split.code(), "function send(){}");
/// assert_eq!(split.explanation(), "This sends an email.");
/// ```
pub fn split_response(raw: &str) -> SplitResponse {
    let blocks: Vec<&str> = FENCE
        .captures_iter(raw)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|block| !block.is_empty())
        .collect();

    let fenced = FENCE.is_match(raw);

    if !fenced {
        let trimmed = raw.trim();
        return if CODE_TOKENS.is_match(trimmed) {
            debug!("No fenced blocks; treating response as code");
            SplitResponse {
                code: trimmed.to_string(),
                explanation: String::new(),
            }
        } else {
            debug!("No fenced blocks; treating response as explanation");
            SplitResponse {
                code: String::new(),
                explanation: trimmed.to_string(),
            }
        };
    }

    debug!(blocks = blocks.len(), "Extracted fenced code blocks");
    let code = blocks.join("\n\n");
    let without_blocks = FENCE.replace_all(raw, "");
    let explanation = BLANK_RUNS
        .replace_all(&without_blocks, "\n\n")
        .trim()
        .to_string();

    SplitResponse { code, explanation }
}

/// Append the helper library to `code` unless it is already present.
///
/// Blank helper source leaves the code untouched.
///
/// # Examples
///
/// ```
/// use vibecoder_prompt::append_helper;
///
/// let once = append_helper("function main() {}", "function callGemini() {}");
/// let twice = append_helper(&once, "function callGemini() {}");
/// assert_eq!(once, twice);
/// ```
pub fn append_helper(code: &str, helper_source: &str) -> String {
    let helper = helper_source.trim();
    if helper.is_empty() || code.contains(HELPER_MARKER) {
        return code.to_string();
    }
    let rule = "// ".to_string() + &"=".repeat(60);
    format!(
        "{code}\n\n{rule}\n// {HELPER_MARKER} (included automatically)\n{rule}\n\n{helper}",
        code = code.trim_end(),
    )
}

/// Split a response and merge the helper library when requested.
pub fn process_response(raw: &str, include_helper: bool, context: &StaticContext) -> SplitResponse {
    let mut split = split_response(raw);
    if include_helper && !split.code.is_empty() {
        split.code = append_helper(&split.code, context.helper_source());
    }
    split
}
