//! WASM bindings for the editing session.
//!
//! The JavaScript side owns input parsing and rendering; it hands a
//! `JsRaster` to `load`, forwards `(id, leftHalfOnly)` or seed requests, and
//! reads back the current raster and breadcrumb labels.

use glitchkit_core::{Session, SessionConfig, TransformRegistry};
use wasm_bindgen::prelude::*;

use crate::types::JsRaster;

/// One editing session over the built-in transform catalog.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsSession();
/// session.load(new JsRaster(w, h, imageData.data));
/// session.apply(22, true);          // invert, left half
/// const ids = session.apply_seed(42);
/// const out = session.current();
/// ctx.putImageData(new ImageData(out.to_clamped_array(), out.width, out.height), 0, 0);
/// ```
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        JsSession {
            inner: Session::default(),
        }
    }

    /// Create a session from a (possibly partial) config object such as
    /// `{ history_capacity: 20 }`. `undefined` and `null` give the defaults.
    ///
    /// # Errors
    /// Returns error if the object cannot be deserialized
    pub fn with_config(config: JsValue) -> Result<JsSession, JsValue> {
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid session config: {}", e)))?
        };
        Ok(Self::from_config(config))
    }

    /// Replace the current raster and clear history.
    pub fn load(&mut self, raster: &JsRaster) {
        self.inner.load(raster.as_raster().clone());
    }

    /// Apply transform `id`; returns false for unknown ids or no raster.
    pub fn apply(&mut self, id: u32, left_half_only: bool) -> bool {
        self.inner.apply(id, left_half_only)
    }

    /// Run the seeded sequence; returns the ids that were applied.
    pub fn apply_seed(&mut self, seed: u32) -> Vec<u32> {
        self.inner.apply_seed_sequence(seed)
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn repeat_last(&mut self) -> bool {
        self.inner.repeat_last()
    }

    /// Copy of the current raster, if one is loaded.
    pub fn current(&self) -> Option<JsRaster> {
        self.inner.current().cloned().map(JsRaster::from_raster)
    }

    /// Breadcrumb labels such as `["12", "22.5"]`.
    pub fn step_labels(&self) -> Vec<String> {
        self.inner.step_labels()
    }

    /// Breadcrumb tooltips such as `["RGB shift", "Invert (left half)"]`.
    pub fn step_titles(&self) -> Vec<String> {
        let registry = self.inner.registry();
        self.inner
            .steps()
            .iter()
            .map(|step| step.title(registry))
            .collect()
    }

    /// Step records as `[{ id, left_half_only }, ...]`.
    pub fn steps(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.steps())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize steps: {}", e)))
    }

    pub fn has_history(&self) -> bool {
        self.inner.has_history()
    }

    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }

    /// Registered ids, ascending.
    pub fn transform_ids(&self) -> Vec<u32> {
        self.inner.registry().all_ids()
    }

    /// Display name for `id`, or `undefined` when unknown.
    pub fn transform_name(&self, id: u32) -> Option<String> {
        self.inner.registry().get(id).map(|e| e.name().to_string())
    }

    pub fn has_transform(&self, id: u32) -> bool {
        self.inner.registry().has(id)
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSession {
    pub(crate) fn from_config(config: SessionConfig) -> Self {
        JsSession {
            inner: Session::with_config(TransformRegistry::with_builtins(), config),
        }
    }
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}
