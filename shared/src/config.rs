//! Portal configuration.
//!
//! All static content (sidebar, quick actions, masked profile, login copy)
//! plus the few tunables live in `portal.json`, embedded at compile time and
//! checked once on startup.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::navigation::{DEFAULT_SECTION, option_section, slugify};

const EMBEDDED_CONFIG: &str = include_str!("../portal.json");

/// Delay used when the config does not set `login_delay_ms`.
pub const DEFAULT_LOGIN_DELAY_MS: u32 = 1500;

fn default_login_delay_ms() -> u32 {
    DEFAULT_LOGIN_DELAY_MS
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

// =========================================================
// Errors
// =========================================================

#[derive(Debug)]
pub enum ConfigError {
    /// `portal.json` is not valid JSON or does not match the schema.
    Parse(serde_json_wasm::de::Error),
    EmptySidebar,
    /// An item or option label is empty or whitespace.
    BlankLabel,
    /// Two entries normalize to the same section identifier.
    DuplicateSection(String),
    ZeroLoginDelay,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid portal config: {}", e),
            ConfigError::EmptySidebar => write!(f, "Portal config has no sidebar items"),
            ConfigError::BlankLabel => write!(f, "Portal config contains a blank label"),
            ConfigError::DuplicateSection(s) => write!(f, "Duplicate section identifier: {}", s),
            ConfigError::ZeroLoginDelay => write!(f, "login_delay_ms must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json_wasm::de::Error> for ConfigError {
    fn from(e: serde_json_wasm::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// =========================================================
// Content models
// =========================================================

/// Top-level sidebar entry.
///
/// An entry with options is an expandable group; `follow_up` options render
/// indented below the regular ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidebarItem {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub follow_up: Vec<String>,
}

impl SidebarItem {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            follow_up: Vec::new(),
        }
    }

    pub fn is_group(&self) -> bool {
        !self.options.is_empty() || !self.follow_up.is_empty()
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn all_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .chain(self.follow_up.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickAction {
    pub title: String,
}

/// A labelled, already masked value in the profile panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentProfile {
    pub fields: Vec<ProfileField>,
    pub contacts: Vec<ProfileField>,
}

/// Copy shown around the login form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginCopy {
    pub heading: String,
    pub help_text: String,
    pub pin_actions: Vec<String>,
    pub forgot_student_number: String,
    pub prospective_heading: String,
    pub prospective_intro: String,
    pub prospective_offer: String,
}

// =========================================================
// PortalConfig
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortalConfig {
    pub institution: String,
    pub portal_name: String,
    /// Pins the header date; `None` shows today's date.
    #[serde(default)]
    pub banner_date: Option<NaiveDate>,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u32,
    #[serde(default = "default_section")]
    pub default_section: String,
    pub sidebar: Vec<SidebarItem>,
    pub quick_actions: Vec<QuickAction>,
    pub profile: StudentProfile,
    pub login: LoginCopy,
    #[serde(default)]
    pub footer_links: Vec<String>,
}

impl PortalConfig {
    /// Loads the configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PortalConfig = serde_json_wasm::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.login_delay_ms))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sidebar.is_empty() {
            return Err(ConfigError::EmptySidebar);
        }
        if self.login_delay_ms == 0 {
            return Err(ConfigError::ZeroLoginDelay);
        }

        let mut seen = HashSet::new();
        seen.insert(self.default_section.clone());

        for item in &self.sidebar {
            if item.name.trim().is_empty() {
                return Err(ConfigError::BlankLabel);
            }
            if !item.is_group() {
                let slug = item.slug();
                if !seen.insert(slug.clone()) {
                    return Err(ConfigError::DuplicateSection(slug));
                }
                continue;
            }
            for option in item.all_options() {
                if option.trim().is_empty() {
                    return Err(ConfigError::BlankLabel);
                }
                let section = option_section(&item.name, option);
                if !seen.insert(section.clone()) {
                    return Err(ConfigError::DuplicateSection(section));
                }
            }
        }
        Ok(())
    }

    pub fn sidebar_item(&self, name: &str) -> Option<&SidebarItem> {
        self.sidebar.iter().find(|item| item.name == name)
    }
}
