//! Motion editing core (viewer-agnostic)
//!
//! Blends and stitches skeletal motion-capture clips: betweening frame
//! generation between keyframe poses, keyframe reduction/reconstruction at a
//! new spacing, and splicing two clips at their best-matching frame pair with
//! a root-aligned transition.
//!
//! File parsing (BVH), cross-skeleton joint-name remapping, forward
//! kinematics and rendering are external collaborators; everything here
//! operates on the in-memory [`Motion`] structure and returns fresh values.

pub mod alignment;
pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod keyframing;
pub mod stitch;
pub mod transition;

// Re-exports for consumers (loaders, viewers, drivers)
pub use alignment::{distance_matrix, find_best_match, FrameMatch};
pub use config::{RootOffsetMode, StitchConfig};
pub use data::{Motion, Pose, Quat, Skeleton, Vec3, ROOT_JOINT};
pub use error::MotionError;
pub use interp::{interpolate_poses, interpolate_rotations, interpolate_translations, Method};
pub use keyframing::resequence;
pub use stitch::stitch;
pub use transition::blend;
