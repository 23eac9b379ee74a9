//! Axis-aligned integer boxes and nearest-point queries.

use nalgebra::{Point3, Vector3};

/// Axis-aligned box on the integer grid.
///
/// Containment is inclusive on `min` and exclusive on `max` per axis, so a
/// box of size `(n, n, n)` contains exactly `n³` grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundsInt {
    min: Point3<i32>,
    max: Point3<i32>,
}

impl BoundsInt {
    /// Box spanning `position` to `position + size`. Negative sizes extend
    /// the box towards negative coordinates.
    pub fn new(position: Point3<i32>, size: Vector3<i32>) -> Self {
        Self::from_min_max(position, position + size)
    }

    /// Box spanning two corners, in any order.
    pub fn from_min_max(a: Point3<i32>, b: Point3<i32>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    pub fn min(&self) -> Point3<i32> {
        self.min
    }

    pub fn max(&self) -> Point3<i32> {
        self.max
    }

    pub fn x_min(&self) -> i32 {
        self.min.x
    }

    pub fn y_min(&self) -> i32 {
        self.min.y
    }

    pub fn z_min(&self) -> i32 {
        self.min.z
    }

    pub fn x_max(&self) -> i32 {
        self.max.x
    }

    pub fn y_max(&self) -> i32 {
        self.max.y
    }

    pub fn z_max(&self) -> i32 {
        self.max.z
    }

    pub fn size(&self) -> Vector3<i32> {
        self.max - self.min
    }

    pub fn contains(&self, point: &Point3<i32>) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] < self.max[axis])
    }

    pub fn closest_point(&self, point: &Point3<i32>) -> Point3<i32> {
        closest_point_in_box(self, point)
    }
}

/// Returns `point` unchanged if `bounds` contains it, otherwise clamps every
/// axis into `[min, max]`.
///
/// Points on the `max` face are not contained but clamp onto themselves.
pub fn closest_point_in_box(bounds: &BoundsInt, point: &Point3<i32>) -> Point3<i32> {
    if bounds.contains(point) {
        return *point;
    }

    Point3::new(
        num::clamp(point.x, bounds.x_min(), bounds.x_max()),
        num::clamp(point.y, bounds.y_min(), bounds.y_max()),
        num::clamp(point.z, bounds.z_min(), bounds.z_max()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_box() -> BoundsInt {
        BoundsInt::from_min_max(Point3::new(0, 0, 0), Point3::new(10, 10, 10))
    }

    #[test]
    fn test_outside_point_is_clamped() {
        let closest = closest_point_in_box(&unit_box(), &Point3::new(-5, 3, 20));
        assert_eq!(closest, Point3::new(0, 3, 10));
    }

    #[test]
    fn test_inside_point_is_unchanged() {
        let bounds = unit_box();

        for point in &[Point3::new(0, 0, 0), Point3::new(5, 5, 5), Point3::new(9, 0, 9)] {
            assert!(bounds.contains(point));
            assert_eq!(bounds.closest_point(point), *point);
        }
    }

    #[test]
    fn test_max_face_is_exclusive() {
        let bounds = unit_box();
        let on_face = Point3::new(10, 4, 4);

        assert!(!bounds.contains(&on_face));
        assert_eq!(closest_point_in_box(&bounds, &on_face), on_face);
    }

    #[test]
    fn test_negative_size_is_normalized() {
        let bounds = BoundsInt::new(Point3::new(5, 5, 5), Vector3::new(-5, -5, -5));

        assert_eq!(bounds.min(), Point3::new(0, 0, 0));
        assert_eq!(bounds.max(), Point3::new(5, 5, 5));
        assert_eq!(bounds.size(), Vector3::new(5, 5, 5));
        assert_eq!(
            BoundsInt::from_min_max(Point3::new(5, 0, 5), Point3::new(0, 5, 0)),
            bounds
        );
    }

    #[test]
    fn test_empty_box_contains_nothing() {
        let bounds = BoundsInt::new(Point3::new(2, 2, 2), Vector3::zeros());

        assert!(!bounds.contains(&Point3::new(2, 2, 2)));
        assert_eq!(
            closest_point_in_box(&bounds, &Point3::new(-1, 7, 2)),
            Point3::new(2, 2, 2)
        );
    }

    #[test]
    fn test_random_points_land_in_closed_box() {
        let mut rng = StdRng::seed_from_u64(0xB0C5_C1A3_u64);

        for _ in 0..200 {
            let a = Point3::new(
                rng.gen_range(-50..50),
                rng.gen_range(-50..50),
                rng.gen_range(-50..50),
            );
            let b = Point3::new(
                rng.gen_range(-50..50),
                rng.gen_range(-50..50),
                rng.gen_range(-50..50),
            );
            let bounds = BoundsInt::from_min_max(a, b);
            let point = Point3::new(
                rng.gen_range(-100..100),
                rng.gen_range(-100..100),
                rng.gen_range(-100..100),
            );

            let closest = closest_point_in_box(&bounds, &point);

            if bounds.contains(&point) {
                assert_eq!(closest, point);
            }
            for axis in 0..3 {
                assert!(bounds.min()[axis] <= closest[axis]);
                assert!(closest[axis] <= bounds.max()[axis]);
            }
        }
    }
}
