use std::sync::Arc;

use crate::api::{AdminClient, ApiClient, Credential};
use crate::common::{ApiError, LOGIN_FAILED, SessionError, StorageError};

use super::{LOGGED_IN_KEY, SessionStore, StateCell, TOKEN_KEY};

/// Login gate for the admin panel.
///
/// Holds the credential in memory and mirrors it into a [`SessionStore`]
/// so a reload keeps the admin signed in. Admin calls go through the
/// [`AdminClient`] returned by [`AdminSession::client`]; after
/// [`AdminSession::logout`] no new clients are handed out.
#[derive(Clone)]
pub struct AdminSession {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
    credential: StateCell<Option<Credential>>,
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl AdminSession {
    /// Picks up a previous session when both storage keys are present.
    /// The token is not checked against the backend here; see
    /// [`AdminSession::verify`].
    pub fn restore(api: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        let credential = match stored_credential(store.as_ref()) {
            Ok(credential) => credential,
            Err(e) => {
                log::warn!("could not read the stored admin session: {e}");
                None
            }
        };

        if credential.is_some() {
            log::debug!("restored admin session from storage");
        }

        Self {
            api,
            store,
            credential: StateCell::new(credential),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.credential.read(Option::is_some)
    }

    /// Client carrying the current credential, if logged in.
    pub fn client(&self) -> Option<AdminClient> {
        self.credential
            .read(|c| c.clone())
            .map(|credential| self.api.authenticated(credential))
    }

    /// `POST /admin/login`. Storage is only touched once the backend has
    /// accepted the password.
    pub async fn login(&self, password: &str) -> Result<AdminClient, SessionError> {
        if password.trim().is_empty() {
            return Err(SessionError::Rejected("Введите пароль".to_string()));
        }

        let reply = match self.api.login(password).await {
            Ok(reply) => reply,
            Err(ApiError::Status { status, message }) => {
                log::warn!("admin login rejected with status {status}");
                return Err(SessionError::Rejected(non_empty_or(message, LOGIN_FAILED)));
            }
            Err(e) => return Err(e.into()),
        };

        let token = reply.token.trim();
        if !reply.success || token.is_empty() {
            log::warn!("admin login returned no token");
            return Err(SessionError::Rejected(non_empty_or(
                reply.message.unwrap_or_default(),
                LOGIN_FAILED,
            )));
        }

        self.persist(token)?;

        let credential = Credential::new(token);
        self.credential.update(|c| *c = Some(credential.clone()));
        log::info!("admin session started");

        Ok(self.api.authenticated(credential))
    }

    fn persist(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)?;
        if let Err(e) = self.store.set(LOGGED_IN_KEY, "true") {
            let _ = self.store.remove(TOKEN_KEY);
            return Err(e);
        }
        Ok(())
    }

    /// Forgets the credential locally. The backend is not contacted.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.credential.update(|c| *c = None);

        let token = self.store.remove(TOKEN_KEY);
        let flag = self.store.remove(LOGGED_IN_KEY);
        token?;
        flag?;

        log::info!("admin session ended");
        Ok(())
    }

    /// Checks the stored token with an authenticated request. A rejected
    /// token ends the session and yields `Ok(false)`.
    pub async fn verify(&self) -> Result<bool, SessionError> {
        let Some(client) = self.client() else {
            return Ok(false);
        };

        match client.stats().await {
            Ok(_) => Ok(true),
            Err(e) if e.is_unauthorized() => {
                log::info!("stored admin token was rejected");
                self.logout()?;
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ends the session when `err` says the token is no longer accepted.
    /// Returns true if it did.
    pub fn expire_if_unauthorized(&self, err: &ApiError) -> bool {
        if !err.is_unauthorized() || !self.is_logged_in() {
            return false;
        }
        if let Err(e) = self.logout() {
            log::error!("failed to clear expired admin session: {e}");
        }
        true
    }
}

fn stored_credential(store: &dyn SessionStore) -> Result<Option<Credential>, StorageError> {
    let logged_in = store.get(LOGGED_IN_KEY)?;
    let token = store.get(TOKEN_KEY)?;

    Ok(match (logged_in.as_deref(), token) {
        (Some("true"), Some(token)) if !token.trim().is_empty() => Some(Credential::new(token)),
        _ => None,
    })
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
