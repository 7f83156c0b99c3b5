use glam::Vec3;

use crate::{
    material::MaterialId,
    math::point::Point,
    ray::{Ray, RAY_EPSILON},
};

use super::{IntersectionResult, LocalInfo, RayIntersection, Shape};

/// An axis aligned box spanning from `min` to `max`
pub struct Cuboid {
    pub min: Point,
    pub max: Point,
    pub material: MaterialId,
}

impl Cuboid {
    /// Normal of the face `pos` lies on
    fn normal_at(&self, pos: Point) -> Vec3 {
        let to_min = (pos - self.min).abs();
        let to_max = (self.max - pos).abs();

        let mut best = (to_min.x, Vec3::NEG_X);
        for candidate in [
            (to_max.x, Vec3::X),
            (to_min.y, Vec3::NEG_Y),
            (to_max.y, Vec3::Y),
            (to_min.z, Vec3::NEG_Z),
            (to_max.z, Vec3::Z),
        ] {
            if candidate.0 < best.0 {
                best = candidate;
            }
        }
        best.1
    }
}

impl Shape for Cuboid {
    fn intersection(&self, ray: Ray) -> IntersectionResult {
        let inv_direction = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv_direction;
        let t1 = (self.max - ray.origin) * inv_direction;

        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();

        // Missed, behind, or only grazing an edge
        if t_near > t_far || t_far < RAY_EPSILON || (t_far - t_near).abs() < RAY_EPSILON {
            return IntersectionResult::NoIntersection;
        }

        let range = ray.range();
        let t = if range.contains(&t_near) {
            t_near
        } else if range.contains(&t_far) {
            t_far
        } else {
            return IntersectionResult::NoIntersection;
        };

        let pos = ray.at(t);
        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: LocalInfo {
                pos,
                normal: self.normal_at(pos),
                material: self.material,
                object: Default::default(),
            },
        })
    }
}
