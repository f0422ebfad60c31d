//! Persistent login session
//!
//! The session is the token handed back by `/login` plus the user id. It is
//! stored in the config file and carried through commands as an explicit
//! [`SessionStore`] value rather than read from global state.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, SessionError};

/// Authentication token and user identifier
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on authorized calls
    pub token: String,

    /// Server-side user id
    pub user_id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}

// Tokens should not end up in debug logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Session storage backed by the config file.
///
/// `set` and `clear` write through to disk immediately. There is no expiry
/// tracking; the server decides whether a token is still good.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    config: Config,
}

impl SessionStore {
    /// Open the store at `path`. A missing file is an empty, logged-out store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = Config::load_or_default(&path)?;
        Ok(Self { path, config })
    }

    /// Current session, if one with a non-empty token is stored
    pub fn get(&self) -> Option<&Session> {
        self.config
            .session
            .as_ref()
            .filter(|session| !session.token.is_empty())
    }

    /// Current session, or the precondition error for authorized calls
    pub fn require(&self) -> Result<&Session> {
        self.get().ok_or_else(|| SessionError::NotLoggedIn.into())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Persist a new session, replacing any previous one
    pub fn set(&mut self, session: Session) -> Result<()> {
        debug!("Storing session for user {}", session.user_id);
        self.config.session = Some(session);
        self.config.save_to(&self.path)
    }

    /// Remove both token and user id. Nothing is written when no session is
    /// stored.
    pub fn clear(&mut self) -> Result<()> {
        if self.config.session.is_none() {
            return Ok(());
        }
        debug!("Clearing stored session");
        self.config.session = None;
        self.config.save_to(&self.path)
    }

    /// Loaded configuration the session lives in
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
