//! Session configuration.
//!
//! Every field has a default, so JS callers can pass a partial object
//! through `serde-wasm-bindgen` and get the standard behavior for the rest.

use serde::{Deserialize, Serialize};

/// Default number of undo snapshots kept per session.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Default fewest steps drawn by a seeded sequence.
pub const DEFAULT_MIN_STEPS: u32 = 3;

/// Default most steps drawn by a seeded sequence.
pub const DEFAULT_MAX_STEPS: u32 = 12;

/// Hard ceiling on either sequence bound, keeping one seed call bounded.
pub const MAX_SEQUENCE_STEPS: u32 = 100;

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum retained snapshots. Zero disables undo.
    pub history_capacity: usize,
    /// Seeded sequence length bounds.
    pub sequence: SequenceConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            sequence: SequenceConfig::default(),
        }
    }
}

/// Inclusive bounds for the number of transforms a seed draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub min_steps: u32,
    pub max_steps: u32,
}

impl SequenceConfig {
    /// Bounds with `min <= max` enforced, each capped at
    /// [`MAX_SEQUENCE_STEPS`].
    pub fn normalized(self) -> (u32, u32) {
        let min = self.min_steps.min(MAX_SEQUENCE_STEPS);
        let max = self.max_steps.min(MAX_SEQUENCE_STEPS);
        if min <= max {
            (min, max)
        } else {
            (max, min)
        }
    }

    /// Number of distinct counts a draw can produce.
    pub fn span(self) -> u32 {
        let (min, max) = self.normalized();
        max - min + 1
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            min_steps: DEFAULT_MIN_STEPS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.sequence.min_steps, 3);
        assert_eq!(config.sequence.max_steps, 12);
        assert_eq!(config.sequence.span(), 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"history_capacity": 5}"#).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.sequence, SequenceConfig::default());

        let config: SessionConfig =
            serde_json::from_str(r#"{"sequence": {"max_steps": 4}}"#).unwrap();
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.sequence.min_steps, 3);
        assert_eq!(config.sequence.max_steps, 4);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_inverted_bounds_are_normalized() {
        let seq = SequenceConfig {
            min_steps: 9,
            max_steps: 2,
        };
        assert_eq!(seq.normalized(), (2, 9));
        assert_eq!(seq.span(), 8);
    }

    #[test]
    fn test_full_range_bounds_are_capped() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"sequence": {"min_steps": 0, "max_steps": 4294967295}}"#)
                .unwrap();
        assert_eq!(config.sequence.normalized(), (0, MAX_SEQUENCE_STEPS));
        assert_eq!(config.sequence.span(), MAX_SEQUENCE_STEPS + 1);

        let huge = SequenceConfig {
            min_steps: u32::MAX,
            max_steps: u32::MAX,
        };
        assert_eq!(huge.normalized(), (MAX_SEQUENCE_STEPS, MAX_SEQUENCE_STEPS));
        assert_eq!(huge.span(), 1);
    }

    #[test]
    fn test_roundtrip_json() {
        let config = SessionConfig {
            history_capacity: 0,
            sequence: SequenceConfig {
                min_steps: 1,
                max_steps: 1,
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
