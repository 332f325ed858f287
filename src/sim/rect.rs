//! Oriented rectangle geometry for the body and platforms
//!
//! A rectangle is described by its unrotated top-left corner, its extents and
//! an angle about its center:
//! - position: top-left before rotation
//! - center: position + half extents (the rotation pivot)
//! - angle: radians, set absolutely via [`OrientedRect::rotate`]

use serde::Serialize;

use super::collision::rects_collide;
use super::vector::{Vector2, VectorExt};
use crate::error::SandboxError;

/// Smallest extent accepted, relative to the magnitude of the position.
///
/// Anything thinner collapses to zero once corners are rotated and added
/// back onto the pivot, leaving an edge with no direction.
pub const MIN_RELATIVE_EXTENT: f64 = 1e-9;

/// A rectangle with an arbitrary rotation about its own center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientedRect {
    /// Top-left corner of the unrotated rectangle
    position: Vector2,
    width: f64,
    height: f64,
    /// Rotation pivot; rotation never moves it
    center: Vector2,
    /// Rotation in radians
    angle: f64,
}

impl OrientedRect {
    /// Build an unrotated rectangle. Zero-extent rectangles, and ones too thin
    /// to survive float rounding at their position, are rejected since their
    /// edge axes would have no direction.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, SandboxError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SandboxError::NonFinite("rectangle position"));
        }
        if !width.is_finite() || !height.is_finite() {
            return Err(SandboxError::NonFinite("rectangle extents"));
        }
        let min_extent = MIN_RELATIVE_EXTENT * x.abs().max(y.abs()).max(1.0);
        if width < min_extent || height < min_extent {
            return Err(SandboxError::DegenerateRect { width, height });
        }
        let position = Vector2::new(x, y);
        Ok(Self {
            position,
            width,
            height,
            center: position + Vector2::new(width * 0.5, height * 0.5),
            angle: 0.0,
        })
    }

    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    #[inline]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current rotation in radians
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the absolute rotation in degrees (not an increment)
    pub fn rotate(&mut self, degrees: f64) {
        self.angle = degrees.to_radians();
    }

    /// Move the rectangle; the pivot travels with it
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.center = position + Vector2::new(self.width * 0.5, self.height * 0.5);
    }

    /// Corners in winding order: top-left, top-right, bottom-right,
    /// bottom-left of the unrotated rectangle, rotated about the center
    pub fn corners(&self) -> [Vector2; 4] {
        let Vector2 { x, y } = self.position;
        [
            Vector2::new(x, y),
            Vector2::new(x + self.width, y),
            Vector2::new(x + self.width, y + self.height),
            Vector2::new(x, y + self.height),
        ]
        .map(|corner| (corner - self.center).rotated(self.angle) + self.center)
    }

    /// The two distinct edge directions, normalized.
    ///
    /// Opposite edges are parallel, so two axes cover all four faces.
    pub fn axes(&self) -> [Vector2; 2] {
        let [c0, c1, c2, _] = self.corners();
        // Extents clear MIN_RELATIVE_EXTENT, so these edges are non-zero
        [(c0 - c1).norm(), (c1 - c2).norm()]
    }

    /// SAT overlap test against another rectangle (touching counts)
    pub fn collides_with(&self, other: &OrientedRect) -> bool {
        rects_collide(self, other)
    }
}
