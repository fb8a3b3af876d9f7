//! Interpolation primitives:
//! - lerp_f32 / lerp_vec3 (component-wise linear)
//! - slerp_quat (spherical with shortest-arc sign correction)
//!
//! Quaternions are (x, y, z, w) arrays; slerp output is always normalized.

use crate::data::{Quat, Vec3};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn dot4(a: Quat, b: Quat) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn quat_norm(q: Quat) -> f32 {
    dot4(q, q).sqrt()
}

#[inline]
pub fn normalize4(mut q: Quat) -> Quat {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Above this dot product the arc is too shallow to divide by sin(theta);
/// a normalized linear blend is indistinguishable there.
const SLERP_DOT_THRESHOLD: f32 = 1.0 - 1e-5;

/// Quaternion SLERP with shortest-arc correction.
/// If dot < 0, negate the second quaternion so the interpolation does not
/// take the long way around the 4D sphere. Returns a normalized quaternion
/// (x, y, z, w).
pub fn slerp_quat(a: Quat, mut b: Quat, t: f32) -> Quat {
    let mut d = dot4(a, b);
    if d < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
        d = -d;
    }
    if d > SLERP_DOT_THRESHOLD {
        let q = [
            lerp_f32(a[0], b[0], t),
            lerp_f32(a[1], b[1], t),
            lerp_f32(a[2], b[2], t),
            lerp_f32(a[3], b[3], t),
        ];
        return normalize4(q);
    }
    let theta = d.clamp(-1.0, 1.0).acos();
    let sin_theta = theta.sin();
    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    normalize4([
        a[0] * wa + b[0] * wb,
        a[1] * wa + b[1] * wb,
        a[2] * wa + b[2] * wb,
        a[3] * wa + b[3] * wb,
    ])
}
