//! Glitchkit WASM - WebAssembly bindings for Glitchkit
//!
//! This crate exposes the glitchkit-core session to JavaScript/TypeScript.
//! Decoding, rendering and key handling stay on the JavaScript side.
//!
//! # Module Structure
//!
//! - `types` - `JsRaster`, the RGBA pixel wrapper
//! - `session` - `JsSession`: dispatch, undo, seeded sequences, breadcrumbs
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster, JsSession } from '@glitchkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsSession();
//! session.load(new JsRaster(img.width, img.height, img.data));
//! session.apply(45, false);
//! console.log(session.step_labels());
//! ```

use wasm_bindgen::prelude::*;

mod session;
mod types;

// Re-export public types
pub use session::JsSession;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str(&ready_message()));
}

fn ready_message() -> String {
    format!("glitchkit-wasm {} ready", version())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
