//! WASM bindings for the paginator
//!
//! The tree crosses the boundary as a plain JS object graph (camelCase
//! fields, see [`Node`]); hooks are a Rust-side feature and do not cross.

use crate::node::Node;
use crate::paginate::paginate;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Paginate a node tree into fixed-height pages.
///
/// Resolves with an array of page trees, or rejects with the error message
/// when the page height or the tree geometry is invalid. A `null` or
/// `undefined` root resolves with an empty array.
#[wasm_bindgen(js_name = wrapPages)]
pub fn wrap_pages(root: JsValue, page_height: f32) -> js_sys::Promise {
    let root: Option<Node> = match serde_wasm_bindgen::from_value(root) {
        Ok(tree) => tree,
        Err(err) => return js_sys::Promise::reject(&JsValue::from_str(&err.to_string())),
    };

    match paginate(root.as_ref(), page_height) {
        Ok(pages) => {
            let value = serde_wasm_bindgen::to_value(&pages).unwrap_or(JsValue::NULL);
            js_sys::Promise::resolve(&value)
        }
        Err(err) => js_sys::Promise::reject(&JsValue::from_str(&err.to_string())),
    }
}

/// Get the number of pages the tree would paginate into
#[wasm_bindgen(js_name = pageCount)]
pub fn page_count(root: JsValue, page_height: f32) -> Result<usize, JsValue> {
    let root: Option<Node> =
        serde_wasm_bindgen::from_value(root).map_err(|err| JsValue::from_str(&err.to_string()))?;

    paginate(root.as_ref(), page_height)
        .map(|pages| pages.len())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
