//! Glitchkit Core - deterministic raster transform engine
//!
//! This crate provides the transform catalog, the id registry, the editing
//! session (dispatch, left-half compositing, bounded undo) and the seeded
//! sequence generator. It has no browser dependencies; `glitchkit-wasm`
//! wraps it for JavaScript.
//!
//! # Usage
//!
//! ```ignore
//! use glitchkit_core::{Raster, Session};
//!
//! let mut session = Session::default();
//! session.load(Raster::filled(64, 64, [128, 128, 128, 255]));
//!
//! session.apply(39, false); // posterize 4
//! session.apply(22, true); // invert, left half only
//! let ids = session.apply_seed_sequence(1234);
//!
//! assert!(session.undo());
//! ```

pub mod config;
pub mod effects;
pub mod history;
pub mod luminance;
pub mod raster;
pub mod registry;
pub mod sequence;
pub mod session;

pub use config::{SequenceConfig, SessionConfig};
pub use history::HistoryStack;
pub use raster::{Raster, RasterError};
pub use registry::{TransformEntry, TransformRegistry};
pub use sequence::{draw_sequence, SeededRng};
pub use session::{composite_left_half, Session, StepRecord};
