//! Google Gemini REST client.
//!
//! # Example
//!
//! ```no_run
//! use vibecoder_config::VibeConfig;
//! use vibecoder_context::{ContextLoader, SharedContext};
//! use vibecoder_core::GenerationRequest;
//! use vibecoder_interface::ScriptDriver;
//! use vibecoder_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VibeConfig::load()?;
//! let context = SharedContext::new(ContextLoader::from_config(&config.context));
//! let client = GeminiClient::new(config.gemini.clone(), context)?;
//!
//! let request = GenerationRequest::builder()
//!     .prompt("Email me when a form is submitted")
//!     .build()?;
//! let result = client.generate(&request, "AIza...").await;
//! println!("{:?}", result.code());
//! # Ok(())
//! # }
//! ```

use super::sse::{parse_stream_line, Fragment, LineBuffer};
use super::wire::{
    interpret_error, interpret_generate_response, models_listed, Content, GenerateContentRequest,
    GenerationConfig,
};
use async_trait::async_trait;
use derive_getters::Getters;
use futures_util::StreamExt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};
use vibecoder_config::GeminiConfig;
use vibecoder_context::SharedContext;
use vibecoder_core::{GenerationRequest, GenerationResult, StreamEvent};
use vibecoder_error::{GeminiError, GeminiErrorKind, VibeResult};
use vibecoder_interface::{EventStream, KeyVerification, ScriptDriver, Streaming};
use vibecoder_prompt::{build_system_prompt, process_response};

/// Gemini client shared by script generation, ideas and naming.
///
/// Cloning is cheap; clones share the HTTP connection pool and the static
/// context cache.
#[derive(Debug, Clone, Getters)]
pub struct GeminiClient {
    #[getter(skip)]
    http: reqwest::Client,
    /// Endpoint and sampling configuration
    config: GeminiConfig,
    /// Static context used for system prompts and helper merging
    context: SharedContext,
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl GeminiClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be built.
    pub fn new(config: GeminiConfig, context: SharedContext) -> VibeResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        debug!(base_url = %config.base_url, "Creating Gemini client");
        Ok(Self {
            http,
            config,
            context,
        })
    }

    /// Whole-request limit for buffered calls. Streams are bounded only by
    /// the idle read timeout so long generations can finish.
    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    fn script_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.config.temperature,
            top_k: Some(self.config.top_k),
            top_p: Some(self.config.top_p),
            max_output_tokens: self.config.max_output_tokens,
            response_mime_type: None,
        }
    }

    /// Build the request body, loading static context first if needed.
    ///
    /// A failed load degrades to empty context sections.
    async fn script_request(&self, req: &GenerationRequest) -> GenerateContentRequest {
        if !self.context.ensure_loaded().await {
            debug!("Generating without static context");
        }
        let context = self.context.snapshot();
        let system = build_system_prompt(req.options(), &context);
        GenerateContentRequest {
            system_instruction: Some(Content::system(system)),
            contents: vec![Content::user(req.prompt().clone())],
            generation_config: self.script_generation_config(),
        }
    }

    /// POST a `generateContent` request and return the generated text.
    #[instrument(skip(self, body, api_key), fields(model = %model))]
    pub(crate) async fn generate_text(
        &self,
        model: &str,
        body: &GenerateContentRequest,
        api_key: &str,
    ) -> Result<String, GeminiError> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        let response = self
            .http
            .post(self.model_url(model, "generateContent"))
            .timeout(self.request_timeout())
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read Gemini response body");
            GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
        })?;

        interpret_generate_response(status, &text)
    }

    /// Sampling settings for the small structured calls (ideas, naming).
    pub(crate) fn utility_config(&self, max_output_tokens: u32, json: bool) -> GenerationConfig {
        GenerationConfig {
            temperature: self.config.idea_temperature,
            top_k: Some(self.config.top_k),
            top_p: Some(self.config.top_p),
            max_output_tokens,
            response_mime_type: json.then(|| "application/json".to_string()),
        }
    }
}

#[async_trait]
impl ScriptDriver for GeminiClient {
    #[instrument(
        skip(self, req, api_key),
        fields(model = %req.model(), sequence = *req.sequence(), prompt_len = req.prompt().len())
    )]
    async fn generate(&self, req: &GenerationRequest, api_key: &str) -> GenerationResult {
        let started = Instant::now();
        let body = self.script_request(req).await;
        let model = self.config.provider_model(*req.model());

        match self.generate_text(&model, &body, api_key).await {
            Ok(raw) => {
                let context = self.context.snapshot();
                let (code, explanation) =
                    process_response(&raw, *req.options().include_helper(), &context).into_parts();
                let elapsed = elapsed_ms(started);
                info!(elapsed_ms = elapsed, code_len = code.len(), "Script generated");
                GenerationResult::success(raw, code, explanation, elapsed)
            }
            Err(e) => {
                let elapsed = elapsed_ms(started);
                warn!(elapsed_ms = elapsed, error = %e, "Script generation failed");
                GenerationResult::failure(e.user_message(), elapsed)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl Streaming for GeminiClient {
    #[instrument(skip(self, req, api_key), fields(model = %req.model(), sequence = *req.sequence()))]
    async fn generate_stream(&self, req: &GenerationRequest, api_key: &str) -> EventStream {
        let started = Instant::now();

        if api_key.trim().is_empty() {
            let message = GeminiError::new(GeminiErrorKind::MissingApiKey).user_message();
            return Box::pin(futures_util::stream::once(async move {
                StreamEvent::failed(message, elapsed_ms(started))
            }));
        }

        let body = self.script_request(req).await;
        let model = self.config.provider_model(*req.model());
        let request = self
            .http
            .post(self.model_url(&model, "streamGenerateContent"))
            .query(&[("alt", "sse"), ("key", api_key)])
            .json(&body);

        Box::pin(async_stream::stream! {
            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    error!(error = %e, "Failed to open Gemini stream");
                    yield StreamEvent::failed(e.to_string(), elapsed_ms(started));
                    return;
                }
            };

            let status = response.status().as_u16();
            if !(200..300).contains(&status) {
                let text = response.text().await.unwrap_or_default();
                yield StreamEvent::failed(interpret_error(status, &text).user_message(), elapsed_ms(started));
                return;
            }

            let mut bytes = response.bytes_stream();
            let mut lines = LineBuffer::default();
            let mut produced = false;

            loop {
                let (batch, done) = match bytes.next().await {
                    Some(Ok(chunk)) => (lines.push(&chunk), false),
                    Some(Err(e)) => {
                        let err = GeminiError::new(GeminiErrorKind::StreamInterrupted(e.to_string()));
                        warn!(error = %err, "Gemini stream interrupted");
                        yield StreamEvent::failed(err.user_message(), elapsed_ms(started));
                        return;
                    }
                    None => (lines.finish().into_iter().collect::<Vec<_>>(), true),
                };

                for line in batch {
                    match parse_stream_line(&line) {
                        Ok(Fragment::Text(text)) => {
                            produced = true;
                            yield StreamEvent::delta(text, elapsed_ms(started));
                        }
                        Ok(Fragment::ProviderError(message)) => {
                            warn!(message = %message, "Gemini reported an error mid-stream");
                            yield StreamEvent::failed(message, elapsed_ms(started));
                            return;
                        }
                        Ok(Fragment::Skip) => {}
                        Err(e) => {
                            warn!(error = %e, line_len = line.len(), "Skipping unparseable stream fragment");
                        }
                    }
                }

                if done {
                    break;
                }
            }

            if produced {
                debug!(elapsed_ms = elapsed_ms(started), "Gemini stream finished");
                yield StreamEvent::finished(elapsed_ms(started));
            } else {
                let err = GeminiError::new(GeminiErrorKind::EmptyContent);
                yield StreamEvent::failed(err.user_message(), elapsed_ms(started));
            }
        })
    }
}

#[async_trait]
impl KeyVerification for GeminiClient {
    #[instrument(skip(self, api_key))]
    async fn verify_key(&self, api_key: &str) -> bool {
        if api_key.trim().is_empty() {
            return false;
        }
        let url = format!("{}/models", self.config.base_url.trim_end_matches('/'));
        let sent = self
            .http
            .get(url)
            .timeout(self.request_timeout())
            .query(&[("key", api_key)])
            .send()
            .await;
        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "API key verification request failed");
                return false;
            }
        };
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let valid = models_listed(status, &body);
        if !valid {
            warn!(status, "API key verification failed");
        }
        valid
    }
}
