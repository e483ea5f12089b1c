//! Domain logic of the Student iEnabler portal.
//!
//! Everything here is DOM-free so it builds and tests on native targets:
//! - `validation`: credential field rules
//! - `login`: login form state and submission tickets
//! - `navigation`: sidebar selection state
//! - `session`: the authenticated flag owned by the root shell
//! - `config`: embedded portal content and tunables
//! - `calendar`: header date banner

pub mod calendar;
pub mod config;
pub mod login;
pub mod navigation;
pub mod session;
pub mod validation;

pub use config::{ConfigError, PortalConfig, SidebarItem};
pub use login::{Feedback, Field, LoginForm, SubmitOutcome, SubmitTicket, UserType};
pub use navigation::{NavigationState, Selection};
pub use session::Session;
pub use validation::FieldError;
