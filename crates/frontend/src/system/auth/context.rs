use contracts::system::auth::{RegisterRequest, UserProfile};
use leptos::prelude::*;

use super::{api, storage};

/// App-wide auth state. `None` user = unauthenticated, the shell shows the
/// login page.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<UserProfile>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    /// Restore a persisted session on mount. The stored profile is trusted
    /// for the first paint; a profile fetch then validates the token and a
    /// failure tears the session back down.
    pub fn bootstrap(&self) {
        let Some(profile) = storage::get_user() else {
            return;
        };
        if storage::get_token().is_none() {
            return;
        }
        self.user.set(Some(profile));

        let user = self.user;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_profile().await {
                Ok(profile) => user.set(Some(profile)),
                Err(e) => {
                    log::warn!("Session restore failed: {}", e);
                    storage::clear_session();
                    user.set(None);
                }
            }
        });
    }

    /// Login; on success the session is persisted and the gate flips to
    /// the authenticated view. On failure nothing is persisted.
    pub async fn login(&self, email: String, password: String) -> Result<(), String> {
        let session = api::login(email, password).await.map_err(|e| e.message)?;
        storage::save_session(&session.token, &session.user);
        self.user.set(Some(session.user));
        Ok(())
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<(), String> {
        let session = api::register(&request).await.map_err(|e| e.message)?;
        storage::save_session(&session.token, &session.user);
        self.user.set(Some(session.user));
        Ok(())
    }

    pub fn logout(&self) {
        let user = self.user;
        wasm_bindgen_futures::spawn_local(async move {
            api::logout().await;
            storage::clear_session();
            user.set(None);
        });
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
