//! Skeletal motion containers: [`Skeleton`], [`Motion`], [`Pose`].
//!
//! A Motion is a fixed-topology skeleton animated over time: each frame
//! carries, per joint, a local translation and a local rotation (unit
//! quaternion) relative to the parent. Joint ordering is the skeleton's and
//! identical across all frames. Editing operations never mutate a Motion in
//! place; they construct a new one and transfer ownership to the caller.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::interp::functions::quat_norm;

/// Local joint translation (x, y, z). Y is up by convention.
pub type Vec3 = [f32; 3];

/// Local joint rotation as a unit quaternion (x, y, z, w).
pub type Quat = [f32; 4];

/// The root joint is joint index 0 by convention.
pub const ROOT_JOINT: usize = 0;

/// Ordered joint names defining a motion's topology. Immutable once built;
/// the hierarchy itself (parent links) lives with the external loader.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skeleton {
    pub joint_names: Vec<String>,
}

impl Skeleton {
    pub fn new(joint_names: Vec<String>) -> Self {
        Self { joint_names }
    }

    #[inline]
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }
}

/// A single frame's local transforms; the atomic unit interpolation
/// operates on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    pub positions: Vec<Vec3>,
    pub rotations: Vec<Quat>,
}

impl Pose {
    #[inline]
    pub fn joint_count(&self) -> usize {
        self.positions.len()
    }
}

/// An animated skeleton: F frames of `joint_count` local translations and
/// rotations each.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Motion {
    pub skeleton: Skeleton,
    /// F frames, each holding one translation per joint.
    pub positions: Vec<Vec<Vec3>>,
    /// F frames, each holding one unit quaternion (x, y, z, w) per joint.
    pub rotations: Vec<Vec<Quat>>,
}

impl Motion {
    /// Build a motion, validating the frame/joint count invariants up front
    /// rather than at use.
    pub fn new(
        skeleton: Skeleton,
        positions: Vec<Vec<Vec3>>,
        rotations: Vec<Vec<Quat>>,
    ) -> Result<Self, MotionError> {
        let motion = Self {
            skeleton,
            positions,
            rotations,
        };
        motion.validate_counts()?;
        Ok(motion)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn joint_count(&self) -> usize {
        self.skeleton.joint_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check the structural invariants: both channels hold the same number of
    /// frames and every frame has exactly `joint_count` entries.
    pub fn validate_counts(&self) -> Result<(), MotionError> {
        if self.positions.len() != self.rotations.len() {
            return Err(MotionError::ChannelLengthMismatch {
                positions: self.positions.len(),
                rotations: self.rotations.len(),
            });
        }
        let joints = self.joint_count();
        for frame in &self.positions {
            if frame.len() != joints {
                return Err(MotionError::JointCountMismatch {
                    expected: joints,
                    got: frame.len(),
                });
            }
        }
        for frame in &self.rotations {
            if frame.len() != joints {
                return Err(MotionError::JointCountMismatch {
                    expected: joints,
                    got: frame.len(),
                });
            }
        }
        Ok(())
    }

    /// Strict check that every rotation is unit-norm within `tolerance`.
    ///
    /// Loaders that already normalize can skip this; [`Motion::new`] does not
    /// call it.
    pub fn validate_rotations(&self, tolerance: f32) -> Result<(), MotionError> {
        for (frame, quats) in self.rotations.iter().enumerate() {
            for (joint, q) in quats.iter().enumerate() {
                let norm = quat_norm(*q);
                if (norm - 1.0).abs() > tolerance {
                    return Err(MotionError::DegenerateQuaternion { frame, joint, norm });
                }
            }
        }
        Ok(())
    }

    /// Extract one frame as an owned [`Pose`].
    pub fn pose(&self, frame: usize) -> Result<Pose, MotionError> {
        if frame >= self.frame_count() {
            return Err(MotionError::IndexOutOfRange {
                index: frame,
                len: self.frame_count(),
            });
        }
        Ok(Pose {
            positions: self.positions[frame].clone(),
            rotations: self.rotations[frame].clone(),
        })
    }
}
