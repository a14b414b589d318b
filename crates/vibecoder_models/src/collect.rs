//! Folding a streamed generation into a single result.

use futures_util::StreamExt;
use tracing::debug;
use vibecoder_context::StaticContext;
use vibecoder_core::{GenerationResult, StreamEvent};
use vibecoder_interface::EventStream;
use vibecoder_prompt::process_response;

/// Drain a generation stream into a [`GenerationResult`].
///
/// `on_event` sees every event before it is folded in, so callers can render
/// text as it arrives. A stream that ends without a final event is treated as
/// interrupted.
pub async fn collect_stream<F>(
    mut events: EventStream,
    include_helper: bool,
    context: &StaticContext,
    mut on_event: F,
) -> GenerationResult
where
    F: FnMut(&StreamEvent),
{
    let mut raw = String::new();
    let mut last_elapsed = 0;

    while let Some(event) = events.next().await {
        on_event(&event);
        last_elapsed = *event.elapsed_ms();

        if let Some(delta) = event.text_delta() {
            raw.push_str(delta);
        }

        if *event.is_final() {
            if let Some(error) = event.error() {
                return GenerationResult::failure(error.clone(), last_elapsed);
            }
            debug!(chars = raw.len(), "Stream collected");
            let (code, explanation) = process_response(&raw, include_helper, context).into_parts();
            return GenerationResult::success(raw, code, explanation, last_elapsed);
        }
    }

    GenerationResult::failure("Stream interrupted: ended without completion", last_elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[tokio::test]
    async fn deltas_are_joined_and_split() {
        let events = vec![
            StreamEvent::delta("```js\nfunction a", 10),
            StreamEvent::delta("() {}\n```\nExplains a.", 20),
            StreamEvent::finished(30),
        ];
        let mut seen = 0;
        let result = collect_stream(
            Box::pin(stream::iter(events)),
            false,
            &StaticContext::empty(),
            |_| seen += 1,
        )
        .await;

        assert_eq!(seen, 3);
        assert!(result.is_success());
        assert_eq!(result.code(), Some("function a() {}"));
        assert_eq!(result.explanation(), Some("Explains a."));
        assert_eq!(result.response_time_ms(), 30);
    }

    #[tokio::test]
    async fn final_error_fails_the_result() {
        let events = vec![
            StreamEvent::delta("partial", 5),
            StreamEvent::failed("Stream interrupted: reset", 9),
        ];
        let result = collect_stream(
            Box::pin(stream::iter(events)),
            true,
            &StaticContext::empty(),
            |_| {},
        )
        .await;
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("Stream interrupted: reset"));
        assert!(result.code().is_none());
    }

    #[tokio::test]
    async fn missing_final_event_is_interrupted() {
        let events = vec![StreamEvent::delta("x", 1)];
        let result = collect_stream(
            Box::pin(stream::iter(events)),
            false,
            &StaticContext::empty(),
            |_| {},
        )
        .await;
        assert!(!result.is_success());
    }
}
