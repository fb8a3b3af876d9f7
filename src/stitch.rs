//! One-call clip stitching: search, then splice.

use crate::alignment::find_best_match;
use crate::config::StitchConfig;
use crate::data::Motion;
use crate::error::MotionError;
use crate::transition::blend;

/// Stitch `motion2` onto `motion1`: find the best-matching frame pair within
/// `cfg.search_radius` of the anchors, then splice with a root-aligned
/// transition of `cfg.between_frames` frames.
///
/// Motions captured on different skeletons must be remapped to a shared
/// joint order by the caller first.
pub fn stitch(
    motion1: &Motion,
    anchor1: usize,
    motion2: &Motion,
    anchor2: usize,
    cfg: &StitchConfig,
) -> Result<Motion, MotionError> {
    let found = find_best_match(motion1, anchor1, motion2, anchor2, cfg.search_radius)?;
    blend(
        motion1,
        found.frame1,
        motion2,
        found.frame2,
        cfg.between_frames,
        cfg.root_offset,
    )
}
