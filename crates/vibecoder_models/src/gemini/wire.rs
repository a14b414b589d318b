//! Request and response bodies for `generateContent` and `models`.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use vibecoder_error::{GeminiError, GeminiErrorKind};

/// One turn of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text at `candidates[0].content.parts[0].text`.
    pub(crate) fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Option<Vec<serde_json::Value>>,
}

/// Build the error for a non-success status from the response body.
///
/// The provider's `error.message` is used when present, `"Unknown error"` otherwise.
pub fn interpret_error(status: u16, body: &str) -> GeminiError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Unknown error".to_string());
    error!(status, message = %message, "Gemini API returned error");
    GeminiError::new(GeminiErrorKind::HttpError {
        status_code: status,
        message,
    })
}

/// Turn a `generateContent` status and body into generated text.
///
/// # Errors
///
/// - Non-2xx status: `HttpError` with the status and provider message.
/// - Undecodable body: `InvalidResponse`.
/// - Missing or empty text: `EmptyContent`.
///
/// # Examples
///
/// ```
/// use vibecoder_models::interpret_generate_response;
///
/// let err = interpret_generate_response(429, r#"{"error":{"message":"quota exceeded"}}"#)
///     .unwrap_err();
/// assert_eq!(err.user_message(), "API error (429): quota exceeded");
/// ```
pub fn interpret_generate_response(status: u16, body: &str) -> Result<String, GeminiError> {
    if !(200..300).contains(&status) {
        return Err(interpret_error(status, body));
    }

    let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to parse Gemini response");
        GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string()))
    })?;

    match response.first_text() {
        Some(text) if !text.trim().is_empty() => {
            debug!(chars = text.len(), "Gemini returned content");
            Ok(text.to_string())
        }
        _ => Err(GeminiError::new(GeminiErrorKind::EmptyContent)),
    }
}

/// True iff a list-models response is 200 with a non-empty `models` array.
///
/// # Examples
///
/// ```
/// use vibecoder_models::models_listed;
///
/// assert!(!models_listed(200, r#"{"models": []}"#));
/// assert!(models_listed(200, r#"{"models": [{"name": "models/gemini-1.5-pro"}]}"#));
/// ```
pub fn models_listed(status: u16, body: &str) -> bool {
    if status != 200 {
        return false;
    }
    serde_json::from_str::<ModelList>(body)
        .ok()
        .and_then(|l| l.models)
        .is_some_and(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_and_separate_parts() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::system("SYSTEM")),
            contents: vec![Content::user("USER")],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: Some(40),
                top_p: Some(0.95),
                max_output_tokens: 8192,
                response_mime_type: None,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "SYSTEM");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "USER");
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 8192);
        assert!(json["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn error_without_message_is_unknown() {
        let err = interpret_error(500, "<html>oops</html>");
        assert_eq!(err.user_message(), "API error (500): Unknown error");
    }

    #[test]
    fn no_candidates_is_empty_content() {
        let err = interpret_generate_response(200, r#"{"candidates": []}"#).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::EmptyContent);
        assert_eq!(err.user_message(), "No content was generated");
    }

    #[test]
    fn whitespace_text_is_empty_content() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#;
        let err = interpret_generate_response(200, body).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::EmptyContent);
    }

    #[test]
    fn garbage_body_is_invalid_response() {
        let err = interpret_generate_response(200, "not json").unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::InvalidResponse(_)));
    }

    #[test]
    fn text_is_read_from_first_part() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"hello"},{"text":"ignored"}]}}]}"#;
        assert_eq!(interpret_generate_response(200, body).unwrap(), "hello");
    }

    #[test]
    fn non_200_success_codes_do_not_verify() {
        assert!(!models_listed(403, r#"{"models":[{"name":"x"}]}"#));
        assert!(!models_listed(200, r#"{}"#));
        assert!(!models_listed(200, "garbage"));
    }
}
