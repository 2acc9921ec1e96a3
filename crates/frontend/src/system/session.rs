//! Signed-in user and token, shared through context.

use super::storage;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<UserInfo>>,
}

impl SessionContext {
    /// Session restored from localStorage.
    pub fn restore() -> Self {
        Self {
            user: RwSignal::new(storage::load_user()),
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.user.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Token for the `Authorization` header. Read without tracking.
    pub fn token(&self) -> Option<String> {
        self.user
            .with_untracked(|u| u.as_ref().map(|u| u.token.clone()))
            .filter(|t| !t.is_empty())
    }

    pub fn logout(&self) {
        storage::clear_user();
        self.user.set(None);
    }

    /// Ends the session after the server rejected the token.
    pub fn expire(&self) {
        if self.user.with_untracked(|u| u.is_some()) {
            log::warn!("session expired, signing out");
        }
        self.logout();
    }
}
