//! Document-level event listener.
//!
//! Registers a callback on `document` and removes it again on drop, so a
//! component can tie the listener's lifetime to its own.

use wasm_bindgen::prelude::*;

pub struct DocumentListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

impl DocumentListener {
    /// Listens for `event` on the whole document.
    pub fn new<F>(event: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        document()?.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { event, closure })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Ok(document) = document() {
            let _ = document
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}
