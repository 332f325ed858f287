//! 2D vector algebra
//!
//! `Vector2` is glam's `DVec2`: a `Copy` value type whose operators (`+`, `-`,
//! `* s`) and `dot` already return new values. [`VectorExt`] adds the two
//! operations the sandbox needs on top of that: normalization with the
//! zero-length precondition spelled out, and rotation by an angle.

use glam::DVec2;

/// Point or direction in surface coordinates (y grows downward)
pub type Vector2 = DVec2;

/// Extra vector operations used by the geometry and integration code
pub trait VectorExt: Sized {
    /// Unit vector in the same direction.
    ///
    /// Undefined (NaN components) for the zero vector. Callers must guarantee a
    /// non-zero input, or use [`VectorExt::checked_norm`] when they cannot.
    fn norm(self) -> Self;

    /// Unit vector, or `None` when the length is zero or not finite
    fn checked_norm(self) -> Option<Self>;

    /// Rotate by `angle` radians with the standard rotation matrix.
    ///
    /// Positive angles are counter-clockwise in math space, which shows up as
    /// clockwise on a y-down surface.
    fn rotated(self, angle: f64) -> Self;
}

impl VectorExt for DVec2 {
    #[inline]
    fn norm(self) -> Self {
        debug_assert!(self != DVec2::ZERO, "normalizing a zero-length vector");
        self / self.length()
    }

    #[inline]
    fn checked_norm(self) -> Option<Self> {
        self.try_normalize()
    }

    #[inline]
    fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        DVec2::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }
}
