//! Pulling JSON out of model responses.
//!
//! Even with a JSON response type requested, models sometimes wrap output in
//! a markdown fence or add a sentence before it.

use vibecoder_error::{JsonError, VibeResult};

/// Extract the first JSON array or object from a response.
///
/// Tries, in order: a fenced ```json block, any fenced block, then the first
/// balanced `[...]` or `{...}` (whichever opens first).
///
/// # Errors
///
/// Returns an error if no JSON-looking text is present.
///
/// # Examples
///
/// ```
/// use vibecoder_prompt::extract_json;
///
/// let response = "Sure! Here you go:\n[{\"short\": \"a\", \"long\": \"b\"}] Enjoy.";
/// assert_eq!(extract_json(response).unwrap(), "[{\"short\": \"a\", \"long\": \"b\"}]");
/// ```
pub fn extract_json(response: &str) -> VibeResult<String> {
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    let (first, second) = match (response.find('['), response.find('{')) {
        (Some(b), Some(c)) if b < c => (('[', ']'), ('{', '}')),
        (Some(_), None) => (('[', ']'), ('[', ']')),
        _ => (('{', '}'), ('[', ']')),
    };

    if let Some(json) = extract_balanced(response, first.0, first.1)
        .or_else(|| extract_balanced(response, second.0, second.1))
    {
        return Ok(json);
    }

    tracing::warn!(response_length = response.len(), "No JSON found in response");
    Err(JsonError::new(format!(
        "No JSON found in response (length: {})",
        response.len()
    ))
    .into())
}

fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let tagged = format!("```{}", language);

    let content_start = match response.find(&tagged) {
        Some(start) => start + tagged.len(),
        None => {
            let start = response.find("```")? + 3;
            response[start..]
                .find('\n')
                .map(|n| start + n + 1)
                .unwrap_or(start)
        }
    };

    let body = &response[content_start..];
    let content = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + c.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_json_block() {
        let response = "```json\n[{\"short\": \"x\"}]\n```";
        assert_eq!(extract_json(response).unwrap(), "[{\"short\": \"x\"}]");
    }

    #[test]
    fn untagged_fence() {
        let response = "```\n{\"name\": \"InvoiceMailer\"}\n```";
        assert_eq!(extract_json(response).unwrap(), "{\"name\": \"InvoiceMailer\"}");
    }

    #[test]
    fn brackets_inside_strings_do_not_count() {
        let response = "[{\"long\": \"use ] carefully\"}] trailing";
        assert_eq!(
            extract_json(response).unwrap(),
            "[{\"long\": \"use ] carefully\"}]"
        );
    }

    #[test]
    fn object_first_when_brace_precedes_bracket() {
        let response = "{\"a\": [1, 2]}";
        assert_eq!(extract_json(response).unwrap(), "{\"a\": [1, 2]}");
    }

    #[test]
    fn no_json_is_an_error() {
        assert!(extract_json("nothing to see").is_err());
    }
}
