//! Portal configuration context.

use ienabler_shared::PortalConfig;
use leptos::prelude::*;

/// Loaded once in `App`; `StoredValue` keeps it `Copy` for event handlers.
pub type ConfigContext = StoredValue<PortalConfig>;

pub fn provide_config(config: PortalConfig) -> ConfigContext {
    let stored = StoredValue::new(config);
    provide_context(stored);
    stored
}

pub fn use_config() -> ConfigContext {
    use_context::<ConfigContext>().expect("PortalConfig should be provided")
}
