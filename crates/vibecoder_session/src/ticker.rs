//! Once-per-second elapsed counter for an in-flight turn.

use crate::{SessionPhase, SessionState};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Background task that bumps `elapsed_seconds` while its turn is generating.
///
/// The task stops on its own once the phase moves past its turn, and is
/// aborted when the ticker is dropped.
#[derive(Debug)]
pub(crate) struct ElapsedTicker {
    handle: Option<JoinHandle<()>>,
}

impl ElapsedTicker {
    /// Start ticking for `sequence`.
    ///
    /// Outside a tokio runtime no task is spawned and the counter stays at 0.
    pub(crate) fn start(state: Arc<Mutex<SessionState>>, sequence: u64) -> Self {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            debug!("No runtime; elapsed ticker disabled");
            return Self { handle: None };
        };

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut state = state.lock().unwrap_or_else(|p| p.into_inner());
                if state.phase != (SessionPhase::Generating { sequence }) {
                    break;
                }
                state.elapsed_seconds += 1;
            }
        });
        Self {
            handle: Some(handle),
        }
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
