//! Incremental parsing of the `streamGenerateContent` byte stream.
//!
//! With `alt=sse` every fragment arrives as a `data: {json}` line; without it
//! the fragments are bare JSON lines. Both shapes are accepted.

use super::wire::{ApiErrorBody, GenerateContentResponse};

/// Splits a byte stream into complete lines, tolerating chunk boundaries
/// that fall inside a line or a multi-byte character.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    /// Feed a chunk and return every line it completes, without terminators.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            lines.push(
                String::from_utf8_lossy(&line)
                    .trim_end_matches(['\n', '\r'])
                    .to_string(),
            );
        }
        lines
    }

    /// Return the unterminated tail, if any.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let tail = String::from_utf8_lossy(&self.pending).trim().to_string();
        self.pending.clear();
        (!tail.is_empty()).then_some(tail)
    }
}

/// Meaning of one stream line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Generated text
    Text(String),
    /// The provider reported an error inside the stream
    ProviderError(String),
    /// Nothing to emit (blank line, SSE comment, or a fragment without text)
    Skip,
}

/// Interpret one line of the stream.
///
/// # Errors
///
/// Returns the JSON error for a data line that isn't valid JSON. Callers log
/// and skip such lines.
///
/// # Examples
///
/// ```
/// use vibecoder_models::{parse_stream_line, Fragment};
///
/// let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hi"}]}}]}"#;
/// assert_eq!(parse_stream_line(line).unwrap(), Fragment::Text("Hi".to_string()));
/// assert_eq!(parse_stream_line("").unwrap(), Fragment::Skip);
/// ```
pub fn parse_stream_line(line: &str) -> Result<Fragment, serde_json::Error> {
    let line = line.trim();
    let payload = match line.strip_prefix("data:") {
        Some(rest) => rest.trim_start(),
        None if line.starts_with('{') => line,
        None => return Ok(Fragment::Skip),
    };
    if payload.is_empty() || payload == "[DONE]" {
        return Ok(Fragment::Skip);
    }

    let value: serde_json::Value = serde_json::from_str(payload)?;
    if value.get("error").is_some() {
        let body: ApiErrorBody = serde_json::from_value(value)?;
        let message = body
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Ok(Fragment::ProviderError(message));
    }

    let response: GenerateContentResponse = serde_json::from_value(value)?;
    Ok(match response.first_text() {
        Some(text) if !text.is_empty() => Fragment::Text(text.to_string()),
        _ => Fragment::Skip,
    })
}
