//! Session context.
//!
//! The root shell creates one `SessionContext` and provides it to the tree.
//! The router reads it through an injected signal; the views only receive
//! `login`/`logout` callbacks.

use ienabler_shared::Session;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<Session>,
    set_state: WriteSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(Session::new());
        Self { state, set_state }
    }

    /// Session flag as a plain signal, for injection into the router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    pub fn login(&self) {
        if self.set_state.try_update(Session::login).unwrap_or(false) {
            log_info!("[Session] Signed in.");
        }
    }

    /// Navigation back to the login page is left to the router, which watches the flag.
    pub fn logout(&self) {
        if self.set_state.try_update(Session::logout).unwrap_or(false) {
            log_info!("[Session] Signed out.");
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
