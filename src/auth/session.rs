//! Client-side session bootstrap.
//!
//! The admin front-end keeps one named slot of persistent storage holding
//! the last issued [`SessionTicket`]. On startup it runs [`bootstrap`] to
//! decide between the login form and the dashboard; the revalidation itself
//! is injected so the store logic stays independent of the HTTP client.

use std::future::Future;
use std::sync::Mutex;

use crate::auth::dto::SessionTicket;
use crate::auth::error::AuthError;

/// The load/save/clear contract over the single persisted session slot.
pub trait SessionStore {
    fn load(&self) -> Option<SessionTicket>;
    fn save(&self, ticket: &SessionTicket);
    fn clear(&self);
}

#[derive(Debug, Clone)]
pub enum SessionState {
    LoggedOut,
    Authenticated(SessionTicket),
}

/// Run the load → revalidate → refresh-or-clear sequence.
///
/// No stored ticket means `LoggedOut`. A stored ticket is revalidated; on
/// success the refreshed ticket replaces the stored one, on any failure the
/// slot is cleared so a stale session cannot linger.
pub async fn bootstrap<S, F, Fut>(store: &S, revalidate: F) -> SessionState
where
    S: SessionStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<SessionTicket, AuthError>>,
{
    let Some(stored) = store.load() else {
        return SessionState::LoggedOut;
    };

    match revalidate(stored.token).await {
        Ok(fresh) => {
            store.save(&fresh);
            SessionState::Authenticated(fresh)
        }
        Err(e) => {
            tracing::debug!(error = %e, "session revalidation failed, clearing slot");
            store.clear();
            SessionState::LoggedOut
        }
    }
}

/// Persist the ticket handed back by a successful login.
pub fn login_succeeded<S: SessionStore>(store: &S, ticket: &SessionTicket) {
    store.save(ticket);
}

/// Clear the slot unconditionally.
pub fn logout<S: SessionStore>(store: &S) {
    store.clear();
}

/// In-memory store: the single slot behind a mutex. Backs tests and any
/// embedded client that has no platform storage.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionTicket>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionTicket> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, ticket: &SessionTicket) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(ticket.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::dto::AdminUser;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn ticket(token: &str) -> SessionTicket {
        SessionTicket {
            token: token.into(),
            user: AdminUser {
                id: Uuid::new_v4(),
                username: "alice".into(),
                email: "alice@x.com".into(),
                full_name: None,
                is_active: true,
                created_at: OffsetDateTime::UNIX_EPOCH,
                updated_at: OffsetDateTime::UNIX_EPOCH,
                last_login_at: None,
            },
        }
    }

    async fn must_not_revalidate(_token: String) -> Result<SessionTicket, AuthError> {
        panic!("must not revalidate an empty slot")
    }

    #[tokio::test]
    async fn empty_slot_means_logged_out() {
        let store = MemorySessionStore::default();
        let state = bootstrap(&store, must_not_revalidate).await;
        assert!(matches!(state, SessionState::LoggedOut));
    }

    #[tokio::test]
    async fn successful_revalidation_refreshes_the_slot() {
        let store = MemorySessionStore::default();
        login_succeeded(&store, &ticket("old-token"));

        let state = bootstrap(&store, |old| async move {
            assert_eq!(old, "old-token");
            Ok::<_, AuthError>(ticket("fresh-token"))
        })
        .await;

        match state {
            SessionState::Authenticated(t) => assert_eq!(t.token, "fresh-token"),
            SessionState::LoggedOut => panic!("expected authenticated"),
        }
        assert_eq!(store.load().unwrap().token, "fresh-token");
    }

    #[tokio::test]
    async fn failed_revalidation_clears_the_slot() {
        let store = MemorySessionStore::default();
        login_succeeded(&store, &ticket("stale"));

        let state = bootstrap(&store, |_| async {
            Err::<SessionTicket, _>(AuthError::InvalidCredentials)
        })
        .await;

        assert!(matches!(state, SessionState::LoggedOut));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn logout_clears_unconditionally() {
        let store = MemorySessionStore::default();
        logout(&store);
        assert!(store.load().is_none());

        login_succeeded(&store, &ticket("t"));
        logout(&store);
        assert!(store.load().is_none());
    }
}
