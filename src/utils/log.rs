//! Console logging.
//!
//! Messages go to the browser console on wasm and are dropped elsewhere,
//! so host-side tests stay quiet.

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}
