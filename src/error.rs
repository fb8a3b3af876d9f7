//! Error types for motion editing operations.

use serde::{Deserialize, Serialize};

/// Errors surfaced at the public contract of each operation.
///
/// All inputs are deterministic in-memory data, so every variant indicates a
/// caller contract violation rather than a transient condition; nothing is
/// retried or silently recovered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// Unsupported interpolation method name
    #[error("unsupported interpolation method: {0}")]
    InvalidMethod(String),

    /// Pose or motion pair with differing joint counts
    #[error("joint count mismatch: expected {expected}, got {got}")]
    JointCountMismatch { expected: usize, got: usize },

    /// Position and rotation channels disagree on frame count
    #[error("channel length mismatch: {positions} position frames vs {rotations} rotation frames")]
    ChannelLengthMismatch { positions: usize, rotations: usize },

    /// A steps/stride/spacing parameter that must be at least 1
    #[error("step count must be at least 1, got {0}")]
    InvalidStepCount(usize),

    /// Fewer than 2 keyframes selected during resequencing
    #[error("resequencing needs at least 2 keyframes, got {got}")]
    InsufficientFrames { got: usize },

    /// Search window clamped down to zero width
    #[error("empty search window around frame {anchor}")]
    EmptySearchWindow { anchor: usize },

    /// Frame index outside the motion's valid range
    #[error("frame index {index} out of range for {len} frames")]
    IndexOutOfRange { index: usize, len: usize },

    /// Non-unit quaternion caught by strict validation
    #[error("non-unit quaternion at frame {frame}, joint {joint} (norm {norm})")]
    DegenerateQuaternion { frame: usize, joint: usize, norm: f32 },
}
