//! Vector helpers layered on top of `glam`.
//!
//! `Vec3` and `Vec4` come straight from glam, so every operator is
//! component-wise and only defined between vectors of the same size. What
//! glam does not give us is a single tolerance shared by every equality
//! check in the renderer; that lives here.

use glam::{Vec3, Vec4};

/// Absolute per-component tolerance for vector and scalar equality.
pub const EPSILON: f32 = 1e-7;

/// Approximate equality within [`EPSILON`].
pub trait ApproxEq {
    /// True when every component differs by at most [`EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f32 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= EPSILON
    }
}

impl ApproxEq for Vec3 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(*other, EPSILON)
    }
}

impl ApproxEq for Vec4 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(*other, EPSILON)
    }
}

/// Conversions between the 3- and 4-component vectors.
pub trait VecExt {
    /// Pad to four components with the given `w`.
    fn to_vec4(self, w: f32) -> Vec4;
}

impl VecExt for Vec3 {
    #[inline]
    fn to_vec4(self, w: f32) -> Vec4 {
        self.extend(w)
    }
}

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
