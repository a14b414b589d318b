//! Process-wide static context cache with a single-flight load guard.

use crate::{ContextLoader, StaticContext};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct Inner {
    loader: Option<ContextLoader>,
    state: RwLock<StaticContext>,
    load_guard: Mutex<()>,
}

/// Shared handle to the static context.
///
/// Cloning is cheap and every clone sees the same cache. Concurrent first-time
/// callers of [`SharedContext::ensure_loaded`] trigger a single load.
///
/// # Example
///
/// ```
/// use vibecoder_context::{SharedContext, StaticContext};
///
/// let ctx = SharedContext::preloaded(StaticContext::new("// helper", "docs", "samples"));
/// assert!(*ctx.snapshot().loaded());
/// ```
#[derive(Clone)]
pub struct SharedContext {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedContext")
            .field("loader", &self.inner.loader)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl SharedContext {
    fn from_parts(loader: Option<ContextLoader>, state: StaticContext) -> Self {
        Self {
            inner: Arc::new(Inner {
                loader,
                state: RwLock::new(state),
                load_guard: Mutex::new(()),
            }),
        }
    }

    /// An unloaded cache that will load through `loader`.
    pub fn new(loader: ContextLoader) -> Self {
        Self::from_parts(Some(loader), StaticContext::empty())
    }

    /// A cache that is already populated and never loads.
    pub fn preloaded(context: StaticContext) -> Self {
        Self::from_parts(None, context)
    }

    /// A cache with no source; prompts always use empty placeholders.
    pub fn empty() -> Self {
        Self::from_parts(None, StaticContext::empty())
    }

    /// Whether the cache holds a successful load.
    pub fn is_loaded(&self) -> bool {
        *self.read().loaded()
    }

    /// Copy of the current context, loaded or not.
    pub fn snapshot(&self) -> StaticContext {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StaticContext> {
        self.inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Load the context if it isn't loaded yet.
    ///
    /// Returns whether the cache is loaded afterwards. Failures are logged
    /// and leave the cache unloaded so a later call can try again.
    pub async fn ensure_loaded(&self) -> bool {
        if self.is_loaded() {
            return true;
        }

        let _guard = self.inner.load_guard.lock().await;
        if self.is_loaded() {
            debug!("Static context loaded by a concurrent caller");
            return true;
        }

        let Some(loader) = &self.inner.loader else {
            return false;
        };

        match loader.load().await {
            Ok(context) => {
                let mut state = self
                    .inner
                    .state
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                *state = context;
                true
            }
            Err(e) => {
                warn!(error = %e, "Static context unavailable; continuing without it");
                false
            }
        }
    }

    /// Start loading in the background.
    pub fn preload(&self) -> JoinHandle<bool> {
        let ctx = self.clone();
        tokio::spawn(async move { ctx.ensure_loaded().await })
    }
}
