//! Betweening: synthesize the frames between two keyframe poses.
//!
//! Frame policy shared by every operation here: a call with `steps` samples
//! at parametric t = i/steps. The right endpoint (t = 1) is never emitted,
//! it belongs to the following segment or clip; the left endpoint (t = 0) is
//! emitted only when `include_left` is set, bit-exact. `steps == 1`
//! therefore yields just the optional left frame.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{Pose, Quat, Vec3};
use crate::error::MotionError;

pub mod functions;

use functions::{lerp_vec3, slerp_quat};

/// Interpolation method selector. Pose-level operations apply the fixed
/// policy of linear translations and spherical rotations; the selector
/// exists for driver/config surfaces that name methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Component-wise linear, for translations.
    Linear,
    /// Shortest-arc spherical, for rotations.
    Spherical,
}

impl FromStr for Method {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Method::Linear),
            "spherical" => Ok(Method::Spherical),
            other => Err(MotionError::InvalidMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Linear => f.write_str("linear"),
            Method::Spherical => f.write_str("spherical"),
        }
    }
}

#[inline]
fn check_steps(steps: usize) -> Result<(), MotionError> {
    if steps == 0 {
        return Err(MotionError::InvalidStepCount(0));
    }
    Ok(())
}

#[inline]
fn check_joints(left: usize, right: usize) -> Result<(), MotionError> {
    if left != right {
        return Err(MotionError::JointCountMismatch {
            expected: left,
            got: right,
        });
    }
    Ok(())
}

/// Linear betweening of per-joint translations.
///
/// Emits `steps - 1` interior frames, preceded by `left` itself when
/// `include_left` is set.
pub fn interpolate_translations(
    left: &[Vec3],
    right: &[Vec3],
    steps: usize,
    include_left: bool,
) -> Result<Vec<Vec<Vec3>>, MotionError> {
    check_steps(steps)?;
    check_joints(left.len(), right.len())?;
    let start = usize::from(!include_left);
    let mut frames = Vec::with_capacity(steps - start);
    for i in start..steps {
        if i == 0 {
            frames.push(left.to_vec());
            continue;
        }
        let t = i as f32 / steps as f32;
        frames.push(
            left.iter()
                .zip(right.iter())
                .map(|(l, r)| lerp_vec3(*l, *r, t))
                .collect(),
        );
    }
    Ok(frames)
}

/// Spherical betweening of per-joint rotations, independently per joint.
///
/// Equivalent to sampling each joint's 2-key rotation curve at `steps + 1`
/// evenly spaced parameters and discarding the final sample. Same frame
/// indexing as [`interpolate_translations`], so the two channels of a pose
/// pair stay frame-aligned.
pub fn interpolate_rotations(
    left: &[Quat],
    right: &[Quat],
    steps: usize,
    include_left: bool,
) -> Result<Vec<Vec<Quat>>, MotionError> {
    check_steps(steps)?;
    check_joints(left.len(), right.len())?;
    let start = usize::from(!include_left);
    let mut frames = Vec::with_capacity(steps - start);
    for i in start..steps {
        if i == 0 {
            frames.push(left.to_vec());
            continue;
        }
        let t = i as f32 / steps as f32;
        frames.push(
            left.iter()
                .zip(right.iter())
                .map(|(l, r)| slerp_quat(*l, *r, t))
                .collect(),
        );
    }
    Ok(frames)
}

/// Betweening of whole poses: linear translations and spherical rotations,
/// assembled into frame-aligned [`Pose`]s.
pub fn interpolate_poses(
    left: &Pose,
    right: &Pose,
    steps: usize,
    include_left: bool,
) -> Result<Vec<Pose>, MotionError> {
    let positions =
        interpolate_translations(&left.positions, &right.positions, steps, include_left)?;
    let rotations = interpolate_rotations(&left.rotations, &right.rotations, steps, include_left)?;
    debug_assert_eq!(positions.len(), rotations.len());
    Ok(positions
        .into_iter()
        .zip(rotations)
        .map(|(positions, rotations)| Pose {
            positions,
            rotations,
        })
        .collect())
}
