use std::str::FromStr;

use motion_edit_core::interp::functions::{lerp_vec3, quat_norm, slerp_quat};
use motion_edit_core::{
    interpolate_poses, interpolate_rotations, interpolate_translations, Method, MotionError, Pose,
    Quat, Vec3,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn approx_vec3(a: Vec3, b: Vec3, eps: f32) {
    for c in 0..3 {
        approx(a[c], b[c], eps);
    }
}

fn approx_quat(a: Quat, b: Quat, eps: f32) {
    for c in 0..4 {
        approx(a[c], b[c], eps);
    }
}

const IDENTITY: Quat = [0.0, 0.0, 0.0, 1.0];
// 90 degrees about Y
const YAW_90: Quat = [0.0, 0.70710678, 0.0, 0.70710678];
// 120 degrees about the (1,1,1) diagonal
const DIAG_120: Quat = [0.5, 0.5, 0.5, 0.5];

fn rotate(q: Quat, v: Vec3) -> Vec3 {
    let (x, y, z, w) = (q[0], q[1], q[2], q[3]);
    let t = [
        2.0 * (y * v[2] - z * v[1]),
        2.0 * (z * v[0] - x * v[2]),
        2.0 * (x * v[1] - y * v[0]),
    ];
    [
        v[0] + w * t[0] + (y * t[2] - z * t[1]),
        v[1] + w * t[1] + (z * t[0] - x * t[2]),
        v[2] + w * t[2] + (x * t[1] - y * t[0]),
    ]
}

/// it should emit the left frame bit-exactly at index 0 when include_left is set
#[test]
fn left_endpoint_exact() {
    let left = vec![[1.5, 2.5, 3.5], [-0.25, 0.0, 4.0]];
    let right = vec![[9.0, 8.0, 7.0], [1.0, 1.0, 1.0]];
    let frames = interpolate_translations(&left, &right, 4, true).unwrap();
    assert_eq!(frames[0], left);

    let lq = vec![YAW_90, DIAG_120];
    let rq = vec![IDENTITY, IDENTITY];
    let rot_frames = interpolate_rotations(&lq, &rq, 4, true).unwrap();
    assert_eq!(rot_frames[0], lq);
}

/// it should reach the right endpoint exactly at the implied t=1 sample
#[test]
fn implied_right_endpoint_exact() {
    let left = [0.0, -4.0, 16.0];
    let right = [10.0, 4.0, -8.0];
    assert_eq!(lerp_vec3(left, right, 1.0), right);
}

/// it should emit steps-1 interior frames and never the right endpoint
#[test]
fn frame_counts_and_no_right_endpoint() {
    let left = vec![[0.0, 0.0, 0.0]];
    let right = vec![[10.0, 0.0, 0.0]];

    let interior = interpolate_translations(&left, &right, 10, false).unwrap();
    assert_eq!(interior.len(), 9);
    let with_left = interpolate_translations(&left, &right, 10, true).unwrap();
    assert_eq!(with_left.len(), 10);

    // last emitted frame sits at t = 9/10, not at the right endpoint
    approx_vec3(with_left[9][0], [9.0, 0.0, 0.0], 1e-6);
    assert!(with_left.iter().all(|f| f[0] != right[0]));
}

/// it should yield frame [5,0,0] at index 5 for [0,0,0] -> [10,0,0] with 10 steps
#[test]
fn linear_concrete_midpoint() {
    let left = vec![[0.0, 0.0, 0.0]];
    let right = vec![[10.0, 0.0, 0.0]];
    let frames = interpolate_translations(&left, &right, 10, true).unwrap();
    assert_eq!(frames[5][0], [5.0, 0.0, 0.0]);
}

/// it should handle steps == 1 without indexing out of bounds
#[test]
fn single_step_edge() {
    let left = vec![[1.0, 2.0, 3.0]];
    let right = vec![[4.0, 5.0, 6.0]];
    let with_left = interpolate_translations(&left, &right, 1, true).unwrap();
    assert_eq!(with_left, vec![left.clone()]);
    let without = interpolate_translations(&left, &right, 1, false).unwrap();
    assert!(without.is_empty());

    let rot = interpolate_rotations(&[IDENTITY], &[YAW_90], 1, false).unwrap();
    assert!(rot.is_empty());
}

/// it should keep every interpolated quaternion unit-norm
#[test]
fn spherical_unit_norm_property() {
    let left = vec![IDENTITY, DIAG_120];
    let right = vec![YAW_90, IDENTITY];
    let frames = interpolate_rotations(&left, &right, 7, true).unwrap();
    for frame in &frames {
        for q in frame {
            approx(quat_norm(*q), 1.0, 1e-5);
        }
    }
}

/// it should hit the exact halfway rotation on the shortest arc
#[test]
fn spherical_midpoint() {
    let frames = interpolate_rotations(&[IDENTITY], &[YAW_90], 2, false).unwrap();
    assert_eq!(frames.len(), 1);
    // 45 degrees about Y
    approx_quat(frames[0][0], [0.0, 0.38268343, 0.0, 0.92387953], 1e-5);
}

/// it should rotate identically when interpolating toward q and toward -q
#[test]
fn antipodal_quaternion_continuity() {
    let q = YAW_90;
    let neg_q = [-q[0], -q[1], -q[2], -q[3]];
    let toward_q = interpolate_rotations(&[q], &[q], 4, true).unwrap();
    let toward_neg = interpolate_rotations(&[q], &[neg_q], 4, true).unwrap();
    let v = [1.0, 0.0, 0.0];
    for (fa, fb) in toward_q.iter().zip(toward_neg.iter()) {
        approx_vec3(rotate(fa[0], v), rotate(fb[0], v), 1e-5);
    }
}

/// it should take the short way around for nearly-opposite sign encodings
#[test]
fn shortest_arc_sign_correction() {
    // same midpoint whether the target is encoded as q or -q
    let mid_pos = slerp_quat(IDENTITY, YAW_90, 0.5);
    let mid_neg = slerp_quat(
        IDENTITY,
        [-YAW_90[0], -YAW_90[1], -YAW_90[2], -YAW_90[3]],
        0.5,
    );
    let v = [0.0, 0.0, 1.0];
    approx_vec3(rotate(mid_pos, v), rotate(mid_neg, v), 1e-5);
}

/// it should produce frame-aligned position and rotation sequences for poses
#[test]
fn pose_channels_stay_aligned() {
    let left = Pose {
        positions: vec![[0.0; 3], [1.0, 0.0, 0.0]],
        rotations: vec![IDENTITY, DIAG_120],
    };
    let right = Pose {
        positions: vec![[2.0, 0.0, 0.0], [3.0, 0.0, 0.0]],
        rotations: vec![YAW_90, IDENTITY],
    };
    for include_left in [true, false] {
        let poses = interpolate_poses(&left, &right, 6, include_left).unwrap();
        let expected = if include_left { 6 } else { 5 };
        assert_eq!(poses.len(), expected);
        for pose in &poses {
            assert_eq!(pose.positions.len(), 2);
            assert_eq!(pose.rotations.len(), 2);
        }
    }
}

/// it should reject mismatched joint counts and zero steps
#[test]
fn precondition_failures() {
    let two = vec![[0.0; 3], [1.0, 0.0, 0.0]];
    let one = vec![[0.0; 3]];
    let err = interpolate_translations(&two, &one, 4, true).unwrap_err();
    assert_eq!(err, MotionError::JointCountMismatch { expected: 2, got: 1 });

    let err = interpolate_rotations(&[IDENTITY], &[IDENTITY], 0, true).unwrap_err();
    assert_eq!(err, MotionError::InvalidStepCount(0));
}

/// it should parse method names and reject unknown ones
#[test]
fn method_parse_and_display() {
    assert_eq!(Method::from_str("linear").unwrap(), Method::Linear);
    assert_eq!(Method::from_str("spherical").unwrap(), Method::Spherical);
    assert_eq!(
        Method::from_str("slerp").unwrap_err(),
        MotionError::InvalidMethod("slerp".into())
    );
    for method in [Method::Linear, Method::Spherical] {
        assert_eq!(Method::from_str(&method.to_string()).unwrap(), method);
    }
    // serde uses the same snake_case names
    assert_eq!(serde_json::to_string(&Method::Linear).unwrap(), "\"linear\"");
}
