//! Separating Axis Theorem test between oriented rectangles
//!
//! Two convex shapes are disjoint iff their projections onto some axis do not
//! overlap. For a pair of rectangles the candidate axes are the two edge
//! directions of each rectangle, four in total.

use super::rect::OrientedRect;
use super::vector::Vector2;

/// 1-D interval covered by a shape projected onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min: f64,
    max: f64,
}

impl Projection {
    /// Project every corner onto `axis` and keep the extremes
    pub fn onto(axis: Vector2, corners: &[Vector2]) -> Self {
        corners.iter().fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, corner| {
                let d = corner.dot(axis);
                Self {
                    min: acc.min.min(d),
                    max: acc.max.max(d),
                }
            },
        )
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Closed-interval overlap: touching endpoints count
    #[inline]
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(other.max < self.min || self.max < other.min)
    }
}

/// Find an axis separating the two rectangles, if one exists
pub fn separating_axis(a: &OrientedRect, b: &OrientedRect) -> Option<Vector2> {
    let corners_a = a.corners();
    let corners_b = b.corners();
    let [a0, a1] = a.axes();
    let [b0, b1] = b.axes();

    [a0, a1, b0, b1].into_iter().find(|&axis| {
        let pa = Projection::onto(axis, &corners_a);
        let pb = Projection::onto(axis, &corners_b);
        !pa.overlaps(&pb)
    })
}

/// True iff the rectangles overlap (boundary contact included)
#[inline]
pub fn rects_collide(a: &OrientedRect, b: &OrientedRect) -> bool {
    separating_axis(a, b).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> OrientedRect {
        OrientedRect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_projection_overlap_is_closed() {
        let a = Projection { min: 0.0, max: 10.0 };
        let b = Projection { min: 10.0, max: 20.0 };
        let c = Projection {
            min: 10.5,
            max: 20.0,
        };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_projection_onto_axis() {
        let r = rect(10.0, 0.0, 20.0, 5.0);
        let p = Projection::onto(Vector2::new(1.0, 0.0), &r.corners());
        assert_eq!(p.min(), 10.0);
        assert_eq!(p.max(), 30.0);

        // Quarter-turned rect spans its height along x
        let mut r = rect(0.0, 0.0, 20.0, 10.0);
        r.rotate(90.0);
        let p = Projection::onto(Vector2::new(1.0, 0.0), &r.corners());
        assert!((p.min() - 5.0).abs() < 1e-9);
        assert!((p.max() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_rects_collide() {
        let mut a = rect(50.0, 50.0, 40.0, 20.0);
        a.rotate(30.0);
        let b = a.clone();
        assert!(a.collides_with(&b));
    }

    #[test]
    fn test_separated_on_x() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(100.0, 0.0, 20.0, 20.0);
        assert!(!a.collides_with(&b));
        assert!(separating_axis(&a, &b).is_some());
    }

    #[test]
    fn test_edge_contact_counts() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(20.0, 0.0, 20.0, 20.0);
        assert!(a.collides_with(&b));
    }

    #[test]
    fn test_rotated_corner_pokes_in() {
        // Square centered at (10, 10); unrotated its right edge is at x=20,
        // short of the target at x=22. Rotated 45° its corner reaches
        // x = 10 + 10√2 ≈ 24.14.
        let mut diamond = rect(0.0, 0.0, 20.0, 20.0);
        let target = rect(22.0, 0.0, 20.0, 20.0);
        assert!(!diamond.collides_with(&target));

        diamond.rotate(45.0);
        assert!(diamond.collides_with(&target));
        assert!(target.collides_with(&diamond));
    }

    #[test]
    fn test_rotated_needs_own_axes() {
        // Axis-aligned bounding boxes overlap, but the rotated rectangle's own
        // edge normal separates them.
        let mut thin = rect(0.0, 45.0, 100.0, 10.0);
        thin.rotate(45.0);
        let corner_box = rect(70.0, 0.0, 20.0, 20.0);
        assert!(!thin.collides_with(&corner_box));
        assert!(!corner_box.collides_with(&thin));
    }

    #[test]
    fn test_body_on_tilted_platform() {
        let mut platform = rect(250.0, 330.0, 100.0, 20.0);
        platform.rotate(15.0);
        let above = rect(290.0, 290.0, 20.0, 20.0);
        let touching = rect(290.0, 320.0, 20.0, 20.0);
        assert!(!platform.collides_with(&above));
        assert!(platform.collides_with(&touching));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            aw in 1.0f64..80.0, ah in 1.0f64..80.0, aa in -180.0f64..180.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
            bw in 1.0f64..80.0, bh in 1.0f64..80.0, ba in -180.0f64..180.0,
        ) {
            let mut a = rect(ax, ay, aw, ah);
            let mut b = rect(bx, by, bw, bh);
            a.rotate(aa);
            b.rotate(ba);
            prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
        }

        #[test]
        fn prop_self_collision(
            x in -100.0f64..100.0, y in -100.0f64..100.0,
            w in 1.0f64..80.0, h in 1.0f64..80.0, angle in -180.0f64..180.0,
        ) {
            let mut a = rect(x, y, w, h);
            a.rotate(angle);
            prop_assert!(a.collides_with(&a.clone()));
        }
    }
}
