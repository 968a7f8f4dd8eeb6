//! Conversion of core errors into JavaScript exceptions.

use std::fmt::Display;
use wasm_bindgen::JsValue;

/// Report a rejected call on the browser console and wrap it as a JS `Error`.
///
/// Only callable on wasm32; native tests exercise the success paths.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}
