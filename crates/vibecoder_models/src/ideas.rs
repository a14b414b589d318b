//! Idea suggestions.

use crate::gemini::{Content, GenerateContentRequest};
use crate::GeminiClient;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use vibecoder_core::{fallback_ideas, IdeaChip, MAX_IDEAS};
use vibecoder_error::{IdeaError, IdeaErrorKind, VibeResult};
use vibecoder_interface::IdeaSource;
use vibecoder_prompt::extract_json;

/// Prompt sent to the idea model.
pub const IDEA_PROMPT: &str = "Generate 5 specific, practical ideas for Google Apps Scripts that would be useful for business professionals.
Each idea should have both a short title (2-4 words) and a detailed description (1-2 sentences).
The ideas should focus on common spreadsheet, document, or email workflows that can be automated with Apps Script.

Format your response as a JSON array with this exact structure:
[
  {
    \"short\": \"Short title for idea 1\",
    \"long\": \"Detailed description of the first idea that clearly explains what the script would do\"
  }
]

Return only valid JSON with no additional text.";

const IDEA_MAX_OUTPUT_TOKENS_FALLBACK: u32 = 1024;

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse the idea model's reply into at most five chips.
///
/// The reply must be a non-empty JSON array whose first element has non-empty
/// `short` and `long` strings. Later elements missing either field are dropped.
///
/// # Errors
///
/// `Parse` when no JSON can be read, `InvalidFormat` when the shape is wrong.
///
/// # Examples
///
/// ```
/// use vibecoder_models::parse_ideas;
///
/// assert!(parse_ideas(r#"[{"short":"x"}]"#).is_err());
///
/// let ideas = parse_ideas(r#"[{"short":"Mail Merge","long":"Send one email per row."}]"#).unwrap();
/// assert_eq!(ideas[0].short_label(), "Mail Merge");
/// ```
pub fn parse_ideas(text: &str) -> Result<Vec<IdeaChip>, IdeaError> {
    let json = extract_json(text)
        .map_err(|e| IdeaError::new(IdeaErrorKind::Parse(e.to_string())))?;
    let value: Value = serde_json::from_str(&json)
        .map_err(|e| IdeaError::new(IdeaErrorKind::Parse(e.to_string())))?;

    let items = value.as_array().ok_or_else(|| {
        IdeaError::new(IdeaErrorKind::InvalidFormat("expected a JSON array".into()))
    })?;

    let first = items.first().ok_or_else(|| {
        IdeaError::new(IdeaErrorKind::InvalidFormat("no ideas returned".into()))
    })?;
    if non_empty_str(first, "short").is_none() || non_empty_str(first, "long").is_none() {
        return Err(IdeaError::new(IdeaErrorKind::InvalidFormat(
            "first idea lacks short or long text".into(),
        )));
    }

    let ideas: Vec<IdeaChip> = items
        .iter()
        .filter_map(|item| Some(IdeaChip::new(non_empty_str(item, "short")?, non_empty_str(item, "long")?)))
        .take(MAX_IDEAS)
        .collect();
    debug!(count = ideas.len(), "Parsed ideas");
    Ok(ideas)
}

/// Fetch ideas, substituting the static set on any failure.
pub async fn ideas_or_fallback(source: &dyn IdeaSource, api_key: &str) -> Vec<IdeaChip> {
    match source.fetch_ideas(api_key).await {
        Ok(ideas) => ideas,
        Err(e) => {
            warn!(error = %e, "Using fallback ideas");
            fallback_ideas()
        }
    }
}

#[async_trait]
impl IdeaSource for GeminiClient {
    #[instrument(skip(self, api_key))]
    async fn fetch_ideas(&self, api_key: &str) -> VibeResult<Vec<IdeaChip>> {
        let max_tokens = match self.config().idea_max_output_tokens {
            0 => IDEA_MAX_OUTPUT_TOKENS_FALLBACK,
            n => n,
        };
        let body = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(IDEA_PROMPT)],
            generation_config: self.utility_config(max_tokens, true),
        };
        let text = self
            .generate_text(&self.config().idea_model, &body, api_key)
            .await?;
        Ok(parse_ideas(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_than_five_are_truncated() {
        let items: Vec<String> = (0..8)
            .map(|i| format!(r#"{{"short":"S{i}","long":"L{i}"}}"#))
            .collect();
        let ideas = parse_ideas(&format!("[{}]", items.join(","))).unwrap();
        assert_eq!(ideas.len(), 5);
        assert_eq!(ideas[4].short_label(), "S4");
    }

    #[test]
    fn incomplete_later_entries_are_dropped() {
        let ideas =
            parse_ideas(r#"[{"short":"A","long":"a"},{"short":"B"},{"short":"C","long":"c"}]"#)
                .unwrap();
        let labels: Vec<_> = ideas.iter().map(|i| i.short_label().as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn empty_array_is_invalid_format() {
        let err = parse_ideas("[]").unwrap_err();
        assert!(matches!(err.kind, IdeaErrorKind::InvalidFormat(_)));
    }

    #[test]
    fn object_is_invalid_format() {
        let err = parse_ideas(r#"{"short":"x","long":"y"}"#).unwrap_err();
        assert!(matches!(err.kind, IdeaErrorKind::InvalidFormat(_)));
    }

    #[test]
    fn prose_is_parse_error() {
        let err = parse_ideas("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err.kind, IdeaErrorKind::Parse(_)));
    }

    #[test]
    fn fenced_reply_is_accepted() {
        let ideas = parse_ideas("```json\n[{\"short\":\"A\",\"long\":\"a\"}]\n```").unwrap();
        assert_eq!(ideas.len(), 1);
    }
}
