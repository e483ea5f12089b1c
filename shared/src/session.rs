//! Session flag.
//!
//! The only piece of state shared between the two views. It is owned by the
//! root shell and reset by dropping it; nothing is persisted.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Marks the session authenticated. Returns `false` if it already was.
    ///
    /// No credential is checked here: the login view only calls this after its
    /// own validation passed.
    pub fn login(&mut self) -> bool {
        !std::mem::replace(&mut self.authenticated, true)
    }

    /// Marks the session anonymous. Returns `false` if it already was.
    pub fn logout(&mut self) -> bool {
        std::mem::replace(&mut self.authenticated, false)
    }
}
