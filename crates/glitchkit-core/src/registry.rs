//! Transform registry: id -> named transform lookup.
//!
//! The registry is plain configuration owned by whoever builds a
//! [`Session`](crate::Session); there is no process-wide catalog. Ids are
//! caller-assigned, need not be dense, and re-registering an id replaces
//! the previous entry.

use std::collections::BTreeMap;
use std::fmt;

use tracing::info;

use crate::effects;
use crate::raster::Raster;

/// Label shown for ids with no registered transform.
pub const UNKNOWN_NAME: &str = "—";

/// A transform body: reads the source, fully populates the destination.
pub type ApplyFn = dyn Fn(&Raster, &mut Raster) + Send + Sync;

/// Maps source `(width, height)` to output `(width, height)`.
pub type OutputSizeFn = fn(u32, u32) -> (u32, u32);

/// A named transform plus its output-size rule.
pub struct TransformEntry {
    name: String,
    apply: Box<ApplyFn>,
    output_size: Option<OutputSizeFn>,
}

impl TransformEntry {
    /// Create a same-size transform.
    pub fn new(
        name: impl Into<String>,
        apply: impl Fn(&Raster, &mut Raster) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            apply: Box::new(apply),
            output_size: None,
        }
    }

    /// Declare a custom output size (e.g. width/height swap).
    pub fn with_output_size(mut self, output_size: OutputSizeFn) -> Self {
        self.output_size = Some(output_size);
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output dimensions for a `width x height` source. Defaults to identity.
    pub fn output_size_for(&self, width: u32, height: u32) -> (u32, u32) {
        match self.output_size {
            Some(f) => f(width, height),
            None => (width, height),
        }
    }

    /// Run the transform. `dst` must already have the declared output size.
    pub fn apply(&self, src: &Raster, dst: &mut Raster) {
        debug_assert_eq!(
            dst.dimensions(),
            self.output_size_for(src.width, src.height),
            "destination size does not match the declared output size of {}",
            self.name
        );
        (self.apply)(src, dst);
    }
}

impl fmt::Debug for TransformEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformEntry")
            .field("name", &self.name)
            .field("resizes", &self.output_size.is_some())
            .finish()
    }
}

/// Catalog of transforms keyed by positive integer id.
#[derive(Debug, Default)]
pub struct TransformRegistry {
    entries: BTreeMap<u32, TransformEntry>,
}

impl TransformRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the full built-in catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        effects::register_builtins(&mut registry);

        info!(count = registry.len(), "Registered built-in transforms");

        registry
    }

    /// Register a transform. Overwrites any previous entry with the same id.
    pub fn register(&mut self, id: u32, entry: TransformEntry) {
        self.entries.insert(id, entry);
    }

    /// Look up a transform by id.
    pub fn get(&self, id: u32) -> Option<&TransformEntry> {
        self.entries.get(&id)
    }

    /// Whether `id` is registered.
    pub fn has(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    /// All registered ids in ascending order.
    pub fn all_ids(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    /// Display name for `id`, or [`UNKNOWN_NAME`].
    pub fn name_of(&self, id: u32) -> &str {
        self.get(id).map_or(UNKNOWN_NAME, TransformEntry::name)
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
