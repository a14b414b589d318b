//! Script name suggestions.

use crate::gemini::{Content, GenerateContentRequest};
use crate::GeminiClient;
use async_trait::async_trait;
use tracing::{instrument, warn};
use vibecoder_interface::ScriptNaming;

/// Name used when nothing better can be derived.
pub const DEFAULT_SCRIPT_NAME: &str = "VibeCoder Script";

const NAME_MAX_OUTPUT_TOKENS: u32 = 32;
const NAME_MAX_CHARS: usize = 60;

fn naming_prompt(description: &str) -> String {
    format!(
        "Suggest a short, descriptive PascalCase name (2 to 5 words, no spaces, no file extension) \
for a Google Apps Script that does the following:\n\n{}\n\nRespond with the name only.",
        description.trim()
    )
}

/// Derive a name from the description: first three words, capitalized, plus `Script`.
///
/// # Examples
///
/// ```
/// use vibecoder_models::fallback_script_name;
///
/// assert_eq!(fallback_script_name("send weekly REPORTS to my team"), "SendWeeklyReportsScript");
/// assert_eq!(fallback_script_name("   "), "VibeCoder Script");
/// ```
pub fn fallback_script_name(description: &str) -> String {
    let words: String = description
        .split_whitespace()
        .take(3)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        DEFAULT_SCRIPT_NAME.to_string()
    } else {
        format!("{}Script", words)
    }
}

/// Clean a model-suggested name: first line, identifier characters only.
///
/// Returns `None` when nothing usable remains.
pub fn sanitize_script_name(raw: &str) -> Option<String> {
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())?
        .trim_matches(|c: char| c == '`' || c == '"' || c == '\'' || c == '*');
    let line = line.strip_suffix(".gs").unwrap_or(line);
    let cleaned: String = line
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(NAME_MAX_CHARS)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

#[async_trait]
impl ScriptNaming for GeminiClient {
    #[instrument(skip(self, description, api_key), fields(description_len = description.len()))]
    async fn suggest_script_name(&self, description: &str, api_key: &str) -> String {
        if description.trim().is_empty() {
            return DEFAULT_SCRIPT_NAME.to_string();
        }

        let body = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(naming_prompt(description))],
            generation_config: self.utility_config(NAME_MAX_OUTPUT_TOKENS, false),
        };

        match self
            .generate_text(&self.config().idea_model, &body, api_key)
            .await
        {
            Ok(text) => sanitize_script_name(&text).unwrap_or_else(|| fallback_script_name(description)),
            Err(e) => {
                warn!(error = %e, "Script name suggestion failed; deriving from description");
                fallback_script_name(description)
            }
        }
    }
}
