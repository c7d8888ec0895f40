//! WebAssembly bindings for keanu-naming
//!
//! Exposes the two conversions to JavaScript hosts that talk to the engine
//! through their own object bridge.
//!
//! ```javascript
//! import { toRemoteName, toLocalName } from 'keanu-naming';
//!
//! toRemoteName('get_vertex_by_label'); // 'getVertexByLabel'
//! toLocalName('getHTTPValue');         // 'get_http_value'
//! ```

use wasm_bindgen::prelude::*;

/// snake_case → camelCase
#[wasm_bindgen(js_name = "toRemoteName")]
pub fn to_remote_name(identifier: &str) -> String {
    crate::camel::to_remote_name(identifier)
}

/// camelCase → snake_case
#[wasm_bindgen(js_name = "toLocalName")]
pub fn to_local_name(identifier: &str) -> String {
    crate::snake::to_local_name(identifier)
}

/// Whether the identifier is already in snake_case normal form
#[wasm_bindgen(js_name = "isLocalName")]
pub fn is_local_name(identifier: &str) -> bool {
    crate::snake::is_local_name(identifier)
}

/// Get crate version
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    crate::VERSION.to_string()
}
