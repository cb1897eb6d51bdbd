//! Console logging.
//!
//! Writes to the browser console on wasm32. Host builds (tests, tooling)
//! have no console and drop the message.

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}
