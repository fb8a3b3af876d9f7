//! Stitching configuration.

use serde::{Deserialize, Serialize};

/// How the root-position offset is applied when splicing one motion onto
/// another. Some rigs want the full translation corrected, others keep the
/// incoming clip's own vertical trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootOffsetMode {
    /// Shift all three axes of the incoming root trajectory.
    #[default]
    FullTranslation,
    /// Shift only X/Z; the incoming clip keeps its own height (Y up).
    HorizontalOnly,
}

/// Parameters for the one-call [`stitch`](crate::stitch::stitch) facade.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct StitchConfig {
    /// Half-width of the frame search window around each anchor.
    pub search_radius: usize,
    /// Number of synthesized transition frames between the matched pair.
    pub between_frames: usize,
    /// Root offset policy for the spliced frames.
    pub root_offset: RootOffsetMode,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            search_radius: 20,
            between_frames: 8,
            root_offset: RootOffsetMode::default(),
        }
    }
}
