//! The session state machine.

use crate::ticker::ElapsedTicker;
use crate::{Feedback, SessionPhase, TurnOutcome, TurnSettings};
use derive_getters::Getters;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};
use vibecoder_core::{
    DEFAULT_PUBLISH_DESCRIPTION, DEFAULT_SCRIPT_FILE_NAME, GenerationRequest, GenerationResult,
    ModelChoice, PublishRequest, PublishedScript, SavedScript, ScriptUpload,
};
use vibecoder_error::{SessionError, SessionErrorKind, VibeResult};
use vibecoder_interface::{DrivePublisher, NoopEffects, ScriptDriver, TurnEffects};
use vibecoder_prompt::build_refine_prompt;

/// Observable state of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Getters)]
pub struct SessionState {
    /// Lifecycle phase
    pub(crate) phase: SessionPhase,
    /// Whole seconds spent on the current or last turn
    pub(crate) elapsed_seconds: u64,
    /// Result of the last resolved turn
    pub(crate) result: Option<GenerationResult>,
    /// The user's original description
    pub(crate) prompt: String,
    /// Text of the last refinement request
    pub(crate) refine_text: String,
    /// Drive file created from the current result
    pub(crate) saved: Option<SavedScript>,
    /// Deployment created from the saved file
    pub(crate) published: Option<PublishedScript>,
}

/// A turn that has been started but not yet resolved.
///
/// Callers that drive the model themselves, for example to stream output,
/// take a turn from [`SessionController::begin`] and hand the result back to
/// [`SessionController::resolve`].
#[derive(Clone, Getters)]
pub struct PendingTurn {
    /// Request to send
    request: GenerationRequest,
    /// Credential to send it with
    api_key: String,
}

impl std::fmt::Debug for PendingTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTurn")
            .field("request", &self.request)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl PendingTurn {
    /// Sequence number of the request.
    pub fn sequence(&self) -> u64 {
        *self.request.sequence()
    }
}

/// Drives one describe-then-generate conversation.
///
/// All methods take `&self`; wrap the controller in an `Arc` to share it
/// between tasks. At most one request is in flight at a time, and a result
/// only lands if its sequence number matches the turn that is still current.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use vibecoder_session::{SessionController, TurnSettings};
/// # use vibecoder_interface::ScriptDriver;
///
/// # async fn demo(driver: Arc<dyn ScriptDriver>) -> Result<(), Box<dyn std::error::Error>> {
/// let session = SessionController::new(driver, TurnSettings::default().with_api_key("AIza..."));
/// let outcome = session.submit("Email me every new form response").await?;
/// if let Some(result) = outcome.result() {
///     println!("{}", result.code().unwrap_or_default());
/// }
/// session.feedback(true);
/// # Ok(())
/// # }
/// ```
pub struct SessionController {
    driver: Arc<dyn ScriptDriver>,
    effects: Arc<dyn TurnEffects>,
    publisher: Option<Arc<dyn DrivePublisher>>,
    settings: Mutex<TurnSettings>,
    state: Arc<Mutex<SessionState>>,
    sequence: AtomicU64,
    ticker: Mutex<Option<ElapsedTicker>>,
    drive_guard: tokio::sync::Mutex<()>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let settings = self.settings();
        let state = self.snapshot();
        f.debug_struct("SessionController")
            .field("driver", &self.driver.provider_name())
            .field("settings", &settings)
            .field("state", &state)
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SessionController {
    /// Create an idle session backed by `driver`.
    pub fn new(driver: Arc<dyn ScriptDriver>, settings: TurnSettings) -> Self {
        Self {
            driver,
            effects: Arc::new(NoopEffects),
            publisher: None,
            settings: Mutex::new(settings),
            state: Arc::new(Mutex::new(SessionState::default())),
            sequence: AtomicU64::new(0),
            ticker: Mutex::new(None),
            drive_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// Use `effects` for celebration and clipboard copy.
    pub fn with_effects(mut self, effects: Arc<dyn TurnEffects>) -> Self {
        self.effects = effects;
        self
    }

    /// Attach a Drive proxy for save and publish.
    pub fn with_publisher(mut self, publisher: Arc<dyn DrivePublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        lock(&self.state).clone()
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        lock(&self.state).phase
    }

    /// Copy of the current settings.
    pub fn settings(&self) -> TurnSettings {
        lock(&self.settings).clone()
    }

    /// Replace the API key used for new turns.
    pub fn set_api_key(&self, api_key: Option<String>) {
        lock(&self.settings).api_key = api_key;
    }

    /// Replace the model used for new turns.
    pub fn set_model(&self, model: ModelChoice) {
        lock(&self.settings).model = model;
    }

    /// Replace the context toggles used for new turns.
    pub fn set_options(&self, options: vibecoder_core::GenerationOptions) {
        lock(&self.settings).options = options;
    }

    /// Start a turn for `prompt`.
    ///
    /// Returns `Ok(None)` while another turn is generating. Starting a turn
    /// clears the previous result, feedback and Drive records, and starts the
    /// elapsed ticker.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::EmptyPrompt`] for a blank prompt and
    /// [`SessionErrorKind::MissingCredential`] when no API key is set.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub fn begin(&self, prompt: &str) -> Result<Option<PendingTurn>, SessionError> {
        let settings = self.settings();
        let mut state = lock(&self.state);
        if state.phase.is_generating() {
            debug!("Submit ignored; a turn is already generating");
            return Ok(None);
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyPrompt));
        }

        let turn = self.start_turn(&mut state, &settings, prompt.to_string())?;
        state.prompt = prompt.to_string();
        state.refine_text.clear();
        Ok(Some(turn))
    }

    /// Start a refinement turn built from the original prompt and `refinement`.
    ///
    /// Returns `Ok(None)` while another turn is generating.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::NotRefining`] unless the user asked to refine the
    /// current result, plus the errors of [`SessionController::begin`].
    #[instrument(skip(self, refinement), fields(refinement_len = refinement.len()))]
    pub fn begin_refine(&self, refinement: &str) -> Result<Option<PendingTurn>, SessionError> {
        let settings = self.settings();
        let mut state = lock(&self.state);
        match state.phase {
            SessionPhase::Generating { .. } => {
                debug!("Refine ignored; a turn is already generating");
                return Ok(None);
            }
            SessionPhase::Reviewed {
                feedback: Feedback::Refining,
            } => {}
            _ => return Err(SessionError::new(SessionErrorKind::NotRefining)),
        }
        let refinement = refinement.trim();
        if refinement.is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyPrompt));
        }

        let prompt = build_refine_prompt(&state.prompt, refinement);
        let turn = self.start_turn(&mut state, &settings, prompt)?;
        state.refine_text = refinement.to_string();
        Ok(Some(turn))
    }

    /// Callers read `settings` before locking `state`; the settings lock is
    /// never held while the state lock is taken.
    fn start_turn(
        &self,
        state: &mut SessionState,
        settings: &TurnSettings,
        prompt: String,
    ) -> Result<PendingTurn, SessionError> {
        let api_key = settings
            .credential()
            .ok_or_else(|| SessionError::new(SessionErrorKind::MissingCredential))?
            .to_string();

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        state.phase = SessionPhase::Generating { sequence };
        state.elapsed_seconds = 0;
        state.result = None;
        state.saved = None;
        state.published = None;
        *lock(&self.ticker) = Some(ElapsedTicker::start(Arc::clone(&self.state), sequence));

        info!(sequence, model = %settings.model(), "Turn started");
        Ok(PendingTurn {
            request: GenerationRequest::new(prompt, *settings.model(), *settings.options(), sequence),
            api_key,
        })
    }

    /// Apply the result of turn `sequence`.
    ///
    /// Returns `false` and drops the result when the session has moved on.
    /// A successful result triggers celebration and copies the trimmed code
    /// to the clipboard; failures of either are logged and ignored.
    #[instrument(skip(self, result), fields(success = result.is_success()))]
    pub fn resolve(&self, sequence: u64, result: GenerationResult) -> bool {
        let code = {
            let mut state = lock(&self.state);
            if state.phase != (SessionPhase::Generating { sequence }) {
                debug!(current = %state.phase, "Discarding stale result");
                return false;
            }
            lock(&self.ticker).take();
            state.phase = SessionPhase::Reviewed {
                feedback: Feedback::AwaitingFeedback,
            };
            let code = result
                .is_success()
                .then(|| result.code().unwrap_or_default().trim().to_string());
            if let Some(error) = result.error() {
                warn!(error, "Generation failed");
            }
            state.result = Some(result);
            code
        };

        if let Some(code) = code {
            info!(sequence, "Script generated");
            self.effects.celebrate();
            if !code.is_empty()
                && let Err(e) = self.effects.copy_to_clipboard(&code)
            {
                warn!(error = %e, "Clipboard copy failed");
            }
        }
        true
    }

    /// Submit `prompt` and wait for the result.
    ///
    /// # Errors
    ///
    /// See [`SessionController::begin`]. Model failures are not errors; they
    /// arrive as a failed [`GenerationResult`].
    pub async fn submit(&self, prompt: &str) -> Result<TurnOutcome, SessionError> {
        match self.begin(prompt)? {
            Some(turn) => Ok(self.run(turn).await),
            None => Ok(TurnOutcome::Ignored),
        }
    }

    /// Submit a refinement and wait for the result.
    ///
    /// # Errors
    ///
    /// See [`SessionController::begin_refine`].
    pub async fn submit_refine(&self, refinement: &str) -> Result<TurnOutcome, SessionError> {
        match self.begin_refine(refinement)? {
            Some(turn) => Ok(self.run(turn).await),
            None => Ok(TurnOutcome::Ignored),
        }
    }

    async fn run(&self, turn: PendingTurn) -> TurnOutcome {
        let result = self.driver.generate(turn.request(), turn.api_key()).await;
        if self.resolve(turn.sequence(), result.clone()) {
            TurnOutcome::Completed(result)
        } else {
            TurnOutcome::Stale
        }
    }

    /// Record the user's verdict on the current result.
    ///
    /// Returns `false` when there is no result to judge.
    pub fn feedback(&self, satisfied: bool) -> bool {
        let mut state = lock(&self.state);
        if !matches!(state.phase, SessionPhase::Reviewed { .. }) {
            debug!(phase = %state.phase, "Feedback ignored");
            return false;
        }
        let feedback = if satisfied {
            Feedback::Satisfied
        } else {
            Feedback::Refining
        };
        state.phase = SessionPhase::Reviewed { feedback };
        debug!(%feedback, "Feedback recorded");
        true
    }

    /// Return to idle, discarding any in-flight result.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        self.sequence.fetch_add(1, Ordering::SeqCst);
        lock(&self.ticker).take();
        *state = SessionState::default();
        debug!("Session reset");
    }

    fn publisher(&self) -> Result<&Arc<dyn DrivePublisher>, SessionError> {
        self.publisher
            .as_ref()
            .ok_or_else(|| SessionError::new(SessionErrorKind::NoPublisher))
    }

    /// Save the current script to Drive.
    ///
    /// Saving the same result twice returns the first file without another
    /// proxy call.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::NoScript`] without a successful result, and any
    /// Drive proxy error.
    #[instrument(skip(self, access_token))]
    pub async fn save_to_drive(
        &self,
        access_token: &str,
        file_name: Option<&str>,
    ) -> VibeResult<SavedScript> {
        let publisher = Arc::clone(self.publisher()?);
        let _guard = self.drive_guard.lock().await;

        let (sequence, code) = {
            let state = lock(&self.state);
            if let Some(saved) = &state.saved {
                debug!(file_id = %saved.file_id(), "Result already saved");
                return Ok(saved.clone());
            }
            let code = match (&state.phase, &state.result) {
                (SessionPhase::Reviewed { .. }, Some(result)) if result.is_success() => {
                    result.code().unwrap_or_default().trim().to_string()
                }
                _ => return Err(SessionError::new(SessionErrorKind::NoScript).into()),
            };
            (self.sequence.load(Ordering::SeqCst), code)
        };

        let upload = ScriptUpload::new(
            code,
            access_token,
            file_name.unwrap_or(DEFAULT_SCRIPT_FILE_NAME),
        );
        let saved = publisher.create_script(&upload).await?;

        let mut state = lock(&self.state);
        if self.sequence.load(Ordering::SeqCst) == sequence {
            state.saved = Some(saved.clone());
        }
        Ok(saved)
    }

    /// Publish the saved script as a deployment.
    ///
    /// Publishing the same saved file twice returns the first deployment.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::NotSaved`] before a successful save, and any Drive
    /// proxy error.
    #[instrument(skip(self, access_token))]
    pub async fn publish(
        &self,
        access_token: &str,
        description: Option<&str>,
    ) -> VibeResult<PublishedScript> {
        let publisher = Arc::clone(self.publisher()?);
        let _guard = self.drive_guard.lock().await;

        let (sequence, script_id) = {
            let state = lock(&self.state);
            if let Some(published) = &state.published {
                debug!(deployment_id = %published.deployment_id(), "Already published");
                return Ok(published.clone());
            }
            let saved = state
                .saved
                .as_ref()
                .ok_or_else(|| SessionError::new(SessionErrorKind::NotSaved))?;
            (self.sequence.load(Ordering::SeqCst), saved.file_id().clone())
        };

        let request = PublishRequest::new(
            script_id,
            access_token,
            description.unwrap_or(DEFAULT_PUBLISH_DESCRIPTION),
        );
        let published = publisher.publish_script(&request).await?;

        let mut state = lock(&self.state);
        if self.sequence.load(Ordering::SeqCst) == sequence {
            state.published = Some(published.clone());
        }
        Ok(published)
    }
}
