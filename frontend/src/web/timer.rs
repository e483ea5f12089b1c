//! One-shot timer.
//!
//! Thin wrapper over `setTimeout`. Dropping a `Timeout` clears it, so whoever
//! owns the handle decides whether the callback may still run.

use std::time::Duration;

use wasm_bindgen::prelude::*;

pub struct Timeout {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedules `callback` to run once after `delay`.
    ///
    /// # Errors
    /// Fails when there is no `window` or the browser refuses the timer.
    pub fn new<F>(delay: Duration, callback: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let closure = Closure::once(callback);
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )?;

        Ok(Self { handle, closure })
    }

    /// Clears the timer. Clearing one that already fired is harmless.
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
