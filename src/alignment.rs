//! Best-match frame search between two motions.
//!
//! The search is a dense distance table over two bounded frame windows plus
//! a deterministic row-major argmin, not DTW; only the single best cross
//! pair matters for splicing.

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::{Motion, Quat};
use crate::error::MotionError;

/// A matched frame pair and its rotation-space distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameMatch {
    pub frame1: usize,
    pub frame2: usize,
    pub distance: f32,
}

/// Euclidean norm between two frames' flattened rotation arrays.
/// Joint order must already match; callers remap joint names beforehand.
#[inline]
pub fn rotation_distance(a: &[Quat], b: &[Quat]) -> f32 {
    let mut sum = 0.0f32;
    for (qa, qb) in a.iter().zip(b.iter()) {
        for c in 0..4 {
            let d = qa[c] - qb[c];
            sum += d * d;
        }
    }
    sum.sqrt()
}

/// Clamp a window of `radius` frames around `anchor` to `[0, len)`.
#[inline]
fn search_window(anchor: usize, radius: usize, len: usize) -> Range<usize> {
    anchor.saturating_sub(radius)..(anchor + radius).min(len)
}

/// Dense distance table between two frame windows: `table[a][b]` is the
/// rotation distance between `motion1` frame `win1.start + a` and `motion2`
/// frame `win2.start + b`.
///
/// Windows must lie within the motions' frame ranges;
/// [`find_best_match`] validates them before calling.
pub fn distance_matrix(
    motion1: &Motion,
    win1: Range<usize>,
    motion2: &Motion,
    win2: Range<usize>,
) -> Vec<Vec<f32>> {
    win1.map(|i| {
        win2.clone()
            .map(|j| rotation_distance(&motion1.rotations[i], &motion2.rotations[j]))
            .collect()
    })
    .collect()
}

/// Find the pair of frames, one inside each search window, with minimum
/// rotation distance.
///
/// Windows span `search_radius` frames to each side of the anchors, clamped
/// to the valid frame ranges of both motions. Ties keep the first pair in
/// row-major scan order (lowest motion1 frame, then lowest motion2 frame).
pub fn find_best_match(
    motion1: &Motion,
    anchor1: usize,
    motion2: &Motion,
    anchor2: usize,
    search_radius: usize,
) -> Result<FrameMatch, MotionError> {
    if anchor1 >= motion1.frame_count() {
        return Err(MotionError::IndexOutOfRange {
            index: anchor1,
            len: motion1.frame_count(),
        });
    }
    if anchor2 >= motion2.frame_count() {
        return Err(MotionError::IndexOutOfRange {
            index: anchor2,
            len: motion2.frame_count(),
        });
    }
    if motion1.joint_count() != motion2.joint_count() {
        return Err(MotionError::JointCountMismatch {
            expected: motion1.joint_count(),
            got: motion2.joint_count(),
        });
    }

    let win1 = search_window(anchor1, search_radius, motion1.frame_count());
    let win2 = search_window(anchor2, search_radius, motion2.frame_count());
    if win1.is_empty() {
        return Err(MotionError::EmptySearchWindow { anchor: anchor1 });
    }
    if win2.is_empty() {
        return Err(MotionError::EmptySearchWindow { anchor: anchor2 });
    }

    let table = distance_matrix(motion1, win1.clone(), motion2, win2.clone());
    let mut best = FrameMatch {
        frame1: win1.start,
        frame2: win2.start,
        distance: f32::INFINITY,
    };
    for (a, row) in table.iter().enumerate() {
        for (b, &distance) in row.iter().enumerate() {
            // strict `<` keeps the first row-major pair on ties
            if distance < best.distance {
                best = FrameMatch {
                    frame1: win1.start + a,
                    frame2: win2.start + b,
                    distance,
                };
            }
        }
    }

    debug!(
        "best match: frame {} <-> frame {} (distance {})",
        best.frame1, best.frame2, best.distance
    );
    Ok(best)
}
