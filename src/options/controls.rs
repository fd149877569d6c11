use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Mouse-look tuning.
pub struct ControlOptions {
    /// Mouse-look sensitivity, clamped to 1..=10 when applied.
    pub sensitivity: u8,
    /// Whether mouse-look directions are flipped.
    pub invert_mouse: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            sensitivity: 5,
            invert_mouse: true,
        }
    }
}
