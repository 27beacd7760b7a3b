//! Session state and durable persistence
//!
//! The [`SessionStore`] is the single source of truth for "is anyone logged
//! in, and as whom". It is created once at process start and handed by `Arc`
//! to every consumer; nothing else mutates the session. The current session
//! survives restarts through one JSON file under a fixed namespace key.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};
use velora_common::Session;

/// Fixed name of the durable session entry inside the storage directory.
pub const SESSION_FILE: &str = "velora_admin_user.json";

/// Handle returned by [`SessionStore::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct StoreState {
    session: Option<Session>,
    initialized: bool,
}

/// Owner of the current [`Session`] and its durable copy.
///
/// All operations are synchronous. Mutations notify registered listeners
/// after internal locks are released; a listener may read the store but must
/// not subscribe or unsubscribe from within a notification.
pub struct SessionStore {
    path: PathBuf,
    state: RwLock<StoreState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl SessionStore {
    /// Create an uninitialized store persisting into `storage_dir`.
    ///
    /// No disk access happens here; call [`initialize`](Self::initialize)
    /// before the first route-guard decision.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: storage_dir.into().join(SESSION_FILE),
            state: RwLock::new(StoreState::default()),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Load the persisted session, if any, and mark the store initialized.
    ///
    /// A missing file means no session. Unreadable or malformed content is
    /// treated the same way, logged at warn; it never fails the startup.
    /// Idempotent: later calls are no-ops.
    pub fn initialize(&self) {
        let restored = {
            let mut state = self.state.write();
            if state.initialized {
                return;
            }
            state.initialized = true;

            match std::fs::read_to_string(&self.path) {
                Ok(content) => match serde_json::from_str::<Session>(&content) {
                    Ok(session) => {
                        state.session = Some(session.clone());
                        Some(session)
                    }
                    Err(error) => {
                        warn!(path = %self.path.display(), %error, "Ignoring malformed session file");
                        None
                    }
                },
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %self.path.display(), "No persisted session");
                    None
                }
                Err(error) => {
                    warn!(path = %self.path.display(), %error, "Failed to read persisted session");
                    None
                }
            }
        };

        if let Some(session) = restored {
            debug!(email = %session.principal.email, "Restored persisted session");
            self.notify(Some(&session));
        }
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    /// The current session, or `None` when logged out.
    pub fn current(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    /// The live bearer credential, read at call time.
    pub fn bearer_token(&self) -> Option<String> {
        self.state.read().session.as_ref().map(|s| s.token.clone())
    }

    /// Replace the current session, persist it, and notify listeners.
    ///
    /// Persistence is best-effort: on failure the session stays in memory
    /// and a warning is logged.
    pub fn set(&self, session: Session) {
        {
            let mut state = self.state.write();
            state.session = Some(session.clone());
        }

        if let Err(error) = self.persist(&session) {
            warn!(path = %self.path.display(), %error, "Failed to persist session; keeping it in memory");
        }

        self.notify(Some(&session));
    }

    /// Drop the current session, remove the durable copy, notify listeners.
    pub fn clear(&self) {
        {
            let mut state = self.state.write();
            state.session = None;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                warn!(path = %self.path.display(), %error, "Failed to remove persisted session");
            }
        }

        self.notify(None);
    }

    /// Register a listener invoked after every mutation with the new state.
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&Session>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(entry, _)| *entry != id);
    }

    fn persist(&self, session: &Session) -> std::io::Result<()> {
        let body = serde_json::to_string(session).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, body)
    }

    fn notify(&self, session: Option<&Session>) {
        let listeners = self.listeners.lock();
        for (_, listener) in listeners.iter() {
            listener(session);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("initialized", &state.initialized)
            .field("has_session", &state.session.is_some())
            .finish()
    }
}
