//! Session context shared by the nav bar and every screen.
//!
//! A single "who am I" resolution runs at the app root and is re-run on
//! demand (after login or registration). Screens read the resolved identity
//! from context instead of asking the API themselves.

use dioxus::prelude::*;
use hms_model::{Capability, Identity};
use tracing::{debug, warn};

use crate::api::{self, ApiClient};

#[derive(Clone, Copy)]
pub struct Session {
    identity: Signal<Option<Identity>>,
    resolved: Signal<bool>,
    generation: Signal<u64>,
}

impl Session {
    /// Current identity, `None` when anonymous or still resolving.
    pub fn identity(&self) -> Option<Identity> {
        (self.identity)()
    }

    /// Whether the resolver has completed at least once.
    pub fn is_resolved(&self) -> bool {
        (self.resolved)()
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.identity
            .read()
            .as_ref()
            .is_some_and(|me| me.allows(capability))
    }

    /// Re-run the resolver against the stored credential.
    pub fn refresh(mut self) {
        *self.generation.write() += 1;
    }

    /// Clear the stored credential and forget the identity.
    ///
    /// Also restarts the resolver, so a check still in flight from before
    /// the logout is dropped instead of restoring the old identity.
    pub fn sign_out(mut self, api: &ApiClient) {
        api::logout(api);
        self.identity.set(None);
        self.resolved.set(true);
        *self.generation.write() += 1;
    }
}

/// Ask the API who the stored credential belongs to.
///
/// No credential means anonymous without a network call. Any failure also
/// means anonymous; the credential itself is left in place.
pub async fn resolve_identity(api: &ApiClient) -> Option<Identity> {
    if !api.has_credential() {
        return None;
    }
    match api::current_identity(api).await {
        Ok(me) => {
            debug!("Session resolved for {} ({})", me.name, me.role);
            Some(me)
        }
        Err(e) => {
            warn!("Session check failed, continuing anonymously: {}", e);
            None
        }
    }
}

/// Create the session context at the app root. Requires an [`ApiClient`]
/// in context.
pub fn use_session_provider() -> Session {
    let api = use_context::<ApiClient>();
    let session = use_context_provider(|| Session {
        identity: Signal::new(None),
        resolved: Signal::new(false),
        generation: Signal::new(0),
    });

    let _ = use_resource(move || {
        let api = api.clone();
        // Subscribe so refresh() and sign_out() re-run the resolver
        let generation = (session.generation)();
        async move {
            let me = resolve_identity(&api).await;
            // Superseded while the check was in flight
            if *session.generation.peek() != generation {
                return;
            }
            let mut identity = session.identity;
            let mut resolved = session.resolved;
            identity.set(me);
            resolved.set(true);
        }
    });

    session
}

/// Session provided by [`use_session_provider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}
