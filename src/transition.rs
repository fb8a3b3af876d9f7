//! Root-aligned transition synthesis and motion concatenation.

use log::debug;

use crate::config::RootOffsetMode;
use crate::data::{Motion, Pose, Vec3, ROOT_JOINT};
use crate::error::MotionError;
use crate::interp::interpolate_poses;

/// Splice `motion2` (from `frame2` on) onto `motion1` (up to `frame1`),
/// bridged by `between_frames` synthesized transition frames.
///
/// motion2's root trajectory is shifted so that its pose at `frame2` lands
/// on motion1's root at `frame1`; `root_offset` selects whether the vertical
/// component participates. The offset touches only the root joint's local
/// translation; child translations are bone offsets and must not move.
///
/// The transition frames are strictly interior: neither endpoint pose is
/// emitted by the interpolation, so the output is exactly
/// `motion1.frames[0..frame1]` ++ transition ++ corrected
/// `motion2.frames[frame2..]`, with the skeleton copied from `motion1`.
/// `between_frames == 0` degenerates to a plain offset-corrected
/// concatenation.
pub fn blend(
    motion1: &Motion,
    frame1: usize,
    motion2: &Motion,
    frame2: usize,
    between_frames: usize,
    root_offset: RootOffsetMode,
) -> Result<Motion, MotionError> {
    if frame1 >= motion1.frame_count() {
        return Err(MotionError::IndexOutOfRange {
            index: frame1,
            len: motion1.frame_count(),
        });
    }
    if frame2 >= motion2.frame_count() {
        return Err(MotionError::IndexOutOfRange {
            index: frame2,
            len: motion2.frame_count(),
        });
    }
    if motion1.joint_count() != motion2.joint_count() {
        return Err(MotionError::JointCountMismatch {
            expected: motion1.joint_count(),
            got: motion2.joint_count(),
        });
    }

    let offset = splice_offset(motion1, frame1, motion2, frame2, root_offset);
    debug!(
        "splicing at {frame1}/{frame2} with root offset [{}, {}, {}]",
        offset[0], offset[1], offset[2]
    );

    let mut tail_positions: Vec<Vec<Vec3>> = motion2.positions[frame2..].to_vec();
    for frame in &mut tail_positions {
        if let Some(root) = frame.get_mut(ROOT_JOINT) {
            root[0] += offset[0];
            root[1] += offset[1];
            root[2] += offset[2];
        }
    }
    let tail_rotations = motion2.rotations[frame2..].to_vec();

    let transition = if between_frames == 0 {
        Vec::new()
    } else {
        let left = motion1.pose(frame1)?;
        let right = Pose {
            positions: tail_positions[0].clone(),
            rotations: tail_rotations[0].clone(),
        };
        // steps = between_frames + 1 without the left endpoint: exactly
        // between_frames frames at t = i / (between_frames + 1)
        interpolate_poses(&left, &right, between_frames + 1, false)?
    };

    let total = frame1 + transition.len() + tail_positions.len();
    let mut positions = Vec::with_capacity(total);
    let mut rotations = Vec::with_capacity(total);
    positions.extend_from_slice(&motion1.positions[..frame1]);
    rotations.extend_from_slice(&motion1.rotations[..frame1]);
    for pose in transition {
        positions.push(pose.positions);
        rotations.push(pose.rotations);
    }
    positions.extend(tail_positions);
    rotations.extend(tail_rotations);

    Ok(Motion {
        skeleton: motion1.skeleton.clone(),
        positions,
        rotations,
    })
}

/// Root-position delta that moves motion2's pose at `frame2` onto motion1's
/// pose at `frame1`, filtered through the offset mode.
fn splice_offset(
    motion1: &Motion,
    frame1: usize,
    motion2: &Motion,
    frame2: usize,
    mode: RootOffsetMode,
) -> Vec3 {
    if motion1.joint_count() == 0 {
        return [0.0; 3];
    }
    let p1 = motion1.positions[frame1][ROOT_JOINT];
    let p2 = motion2.positions[frame2][ROOT_JOINT];
    let mut offset = [p1[0] - p2[0], p1[1] - p2[1], p1[2] - p2[2]];
    if mode == RootOffsetMode::HorizontalOnly {
        offset[1] = 0.0;
    }
    offset
}
