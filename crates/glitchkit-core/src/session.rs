//! Editing session: the current raster, its undo history and the step log.
//!
//! [`Session::apply`] is the single dispatch path. It snapshots the
//! pre-call raster, runs the transform into a freshly allocated destination
//! of the entry's declared size, optionally composites the left half, and
//! commits the result. Unknown ids and calls without a loaded raster are
//! silent no-ops.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SessionConfig;
use crate::history::HistoryStack;
use crate::raster::{Raster, CHANNELS};
use crate::registry::TransformRegistry;
use crate::sequence::draw_sequence;

/// One committed dispatch, as shown in a breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub id: u32,
    /// Whether the left-half composite was actually applied.
    pub left_half_only: bool,
}

impl StepRecord {
    /// Short label: `"12"` or `"12.5"` for a left-half step.
    pub fn label(&self) -> String {
        if self.left_half_only {
            format!("{}.5", self.id)
        } else {
            self.id.to_string()
        }
    }

    /// Transform name, suffixed with `" (left half)"` when applicable.
    pub fn title(&self, registry: &TransformRegistry) -> String {
        let name = registry.name_of(self.id);
        if self.left_half_only {
            format!("{} (left half)", name)
        } else {
            name.to_string()
        }
    }
}

/// Columns `x < width / 2` from `transformed`, the rest from `original`.
///
/// Both rasters must have the same dimensions.
pub fn composite_left_half(original: &Raster, transformed: &Raster) -> Raster {
    debug_assert_eq!(original.dimensions(), transformed.dimensions());

    let mut out = original.clone();
    let width = original.width as usize;
    if width == 0 {
        return out;
    }
    let split = (width / 2) * CHANNELS;
    let row_bytes = width * CHANNELS;
    for (dst, src) in out
        .pixels
        .chunks_exact_mut(row_bytes)
        .zip(transformed.pixels.chunks_exact(row_bytes))
    {
        dst[..split].copy_from_slice(&src[..split]);
    }
    out
}

/// Owns the registry, the current raster and the history for one image.
#[derive(Debug)]
pub struct Session {
    registry: TransformRegistry,
    config: SessionConfig,
    current: Option<Raster>,
    history: HistoryStack,
    steps: Vec<StepRecord>,
}

impl Session {
    /// Create a session with the default configuration.
    pub fn new(registry: TransformRegistry) -> Self {
        Self::with_config(registry, SessionConfig::default())
    }

    pub fn with_config(registry: TransformRegistry, config: SessionConfig) -> Self {
        Self {
            registry,
            history: HistoryStack::new(config.history_capacity),
            config,
            current: None,
            steps: Vec::new(),
        }
    }

    /// Install a new source raster, dropping history and steps.
    pub fn load(&mut self, raster: Raster) {
        debug_assert_eq!(
            raster.pixels.len(),
            raster.pixel_count() * CHANNELS,
            "raster buffer does not match its dimensions"
        );
        debug!(width = raster.width, height = raster.height, "Raster loaded");
        self.current = Some(raster);
        self.clear_history();
        self.steps.clear();
    }

    /// Apply transform `id`. Returns `false` if nothing happened.
    pub fn apply(&mut self, id: u32, left_half_only: bool) -> bool {
        let Some(entry) = self.registry.get(id) else {
            trace!(id, "Unknown transform id ignored");
            return false;
        };
        let Some(current) = self.current.as_ref() else {
            return false;
        };

        let (src_w, src_h) = current.dimensions();
        let (out_w, out_h) = entry.output_size_for(src_w, src_h);

        self.history.push(current);

        let mut dst = Raster::new(out_w, out_h);
        if !current.is_empty() {
            entry.apply(current, &mut dst);
        }

        let same_size = (out_w, out_h) == (src_w, src_h);
        let composite = left_half_only && same_size;
        let result = if composite {
            composite_left_half(current, &dst)
        } else {
            dst
        };

        debug!(
            id,
            name = entry.name(),
            src_w,
            src_h,
            out_w,
            out_h,
            left_half_only = composite,
            "Transform applied"
        );

        self.current = Some(result);
        self.steps.push(StepRecord {
            id,
            left_half_only: composite,
        });
        true
    }

    /// Restore the most recent snapshot. Returns `false` when history is
    /// empty, leaving everything unchanged.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.current = Some(previous);
        self.steps.pop();
        debug!(remaining = self.history.len(), "Undo");
        true
    }

    /// Re-apply the last step with its recorded flag.
    pub fn repeat_last(&mut self) -> bool {
        match self.steps.last().copied() {
            Some(step) if self.registry.has(step.id) => self.apply(step.id, step.left_half_only),
            _ => false,
        }
    }

    /// Expand `seed` into a transform sequence and apply it in order.
    ///
    /// Each step gets its own history entry. Returns the drawn ids, or an
    /// empty list when nothing is loaded or the registry is empty.
    pub fn apply_seed_sequence(&mut self, seed: u32) -> Vec<u32> {
        if self.current.is_none() {
            return Vec::new();
        }
        let ids = draw_sequence(&self.registry.all_ids(), seed, &self.config.sequence);
        debug!(seed, ?ids, "Seed sequence drawn");

        for &id in &ids {
            self.apply(id, false);
        }
        ids
    }

    /// Snapshot the current raster without changing it.
    pub fn push_history(&mut self) {
        if let Some(current) = self.current.as_ref() {
            self.history.push(current);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn current(&self) -> Option<&Raster> {
        self.current.as_ref()
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Breadcrumb labels, oldest first.
    pub fn step_labels(&self) -> Vec<String> {
        self.steps.iter().map(StepRecord::label).collect()
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TransformRegistry::with_builtins())
    }
}
