//! Keyframe reduction and reinsertion.

use log::debug;

use crate::data::Motion;
use crate::error::MotionError;
use crate::interp::{interpolate_rotations, interpolate_translations};

/// Resample `motion` through sparse keyframes.
///
/// Keyframes are taken at every `keyframe_stride`-th frame starting from 0;
/// trailing frames past the last full multiple are dropped (documented
/// truncation, not an error). Each consecutive keyframe pair is then rebuilt
/// as `target_spacing` frames (the left keyframe plus `target_spacing - 1`
/// synthesized ones), so the output holds exactly
/// `(num_keyframes - 1) * target_spacing` frames and no boundary frame is
/// emitted twice.
pub fn resequence(
    motion: &Motion,
    keyframe_stride: usize,
    target_spacing: usize,
) -> Result<Motion, MotionError> {
    if keyframe_stride == 0 || target_spacing == 0 {
        return Err(MotionError::InvalidStepCount(0));
    }

    let frame_count = motion.frame_count();
    let keyframes: Vec<usize> = (0..frame_count).step_by(keyframe_stride).collect();
    if keyframes.len() < 2 {
        return Err(MotionError::InsufficientFrames {
            got: keyframes.len(),
        });
    }

    let out_frames = (keyframes.len() - 1) * target_spacing;
    let mut positions = Vec::with_capacity(out_frames);
    let mut rotations = Vec::with_capacity(out_frames);
    for pair in keyframes.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        positions.extend(interpolate_translations(
            &motion.positions[prev],
            &motion.positions[cur],
            target_spacing,
            true,
        )?);
        rotations.extend(interpolate_rotations(
            &motion.rotations[prev],
            &motion.rotations[cur],
            target_spacing,
            true,
        )?);
    }

    debug!(
        "resequenced {frame_count} frames through {} keyframes (stride {keyframe_stride}) into {} frames (spacing {target_spacing})",
        keyframes.len(),
        positions.len(),
    );

    Ok(Motion {
        skeleton: motion.skeleton.clone(),
        positions,
        rotations,
    })
}
