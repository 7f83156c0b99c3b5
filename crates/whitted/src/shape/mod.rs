//! Contains the objects that are meant to be renderered:
//! - Spheres
//! - Planes
//! - Axis aligned boxes
//!
//! The tracer only sees them through the [Shape] trait: given a ray, what is the nearest surface it hits.

pub mod cuboid;
pub mod plane;
pub mod sphere;

pub use cuboid::Cuboid;
pub use plane::Plane;
pub use sphere::Sphere;

use glam::Vec3;

use crate::{material::MaterialId, math::point::Point, ray::Ray};

/// An abstracted shape to be rendered by raytracing.
///
/// To render a shape we only need to know whether a ray intersect it and if so,
///  some information about the shape at the intersection point
pub trait Shape: Sync + Send {
    /// Check whether `ray` intersect the shape defined by `self` if so, gives all the information needed.
    ///
    /// The hit has to be the nearest one with `t` in `ray.range()`.
    fn intersection(&self, ray: Ray) -> IntersectionResult;
}

/// Index of an object in the list it has been inserted into
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

/// Local information at the hit point
#[derive(Debug, Clone, Copy)]
pub struct LocalInfo {
    pub pos: Point,
    /// Geometric normal, pointing outside of the object whatever side the ray comes from
    pub normal: Vec3,
    pub material: MaterialId,
    pub object: ObjectId,
}

/// Holds local informations and the time of a colision between a ray and a shape.
#[derive(Debug, Clone, Copy)]
pub struct RayIntersection {
    pub t: f32,
    pub local_info: LocalInfo,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy)]
pub enum IntersectionResult {
    Intersection(RayIntersection),
    NoIntersection,
}

impl IntersectionResult {
    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    pub fn min(self, other: Self) -> Self {
        let Self::Intersection(RayIntersection { t: t1, .. }) = self else {
            return other;
        };
        let Self::Intersection(RayIntersection { t: t2, .. }) = other else {
            return self;
        };

        if t1 < t2 {
            self
        } else {
            other
        }
    }
}

impl From<IntersectionResult> for Option<RayIntersection> {
    fn from(val: IntersectionResult) -> Self {
        match val {
            IntersectionResult::Intersection(i) => Some(i),
            IntersectionResult::NoIntersection => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{material::MaterialId, math::point::Point};

    use super::{IntersectionResult, LocalInfo, ObjectId, RayIntersection};

    fn hit(t: f32) -> IntersectionResult {
        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: LocalInfo {
                pos: Point::ORIGIN,
                normal: Vec3::Y,
                material: MaterialId(0),
                object: ObjectId(0),
            },
        })
    }

    fn t_of(res: IntersectionResult) -> Option<f32> {
        Option::<RayIntersection>::from(res).map(|i| i.t)
    }

    #[test]
    fn min() {
        assert_eq!(t_of(hit(1.0).min(hit(2.0))), Some(1.0));
        assert_eq!(t_of(hit(3.0).min(hit(2.0))), Some(2.0));
        assert_eq!(t_of(IntersectionResult::NoIntersection.min(hit(2.0))), Some(2.0));
        assert_eq!(t_of(hit(2.0).min(IntersectionResult::NoIntersection)), Some(2.0));
        assert!(!IntersectionResult::NoIntersection
            .min(IntersectionResult::NoIntersection)
            .is_intersection());
    }
}
