use glam::Vec3;

use crate::{material::MaterialId, math::point::Point, ray::Ray};

use super::{IntersectionResult, LocalInfo, RayIntersection, Shape};

/// An infinite plane going through `origin`
pub struct Plane {
    pub origin: Point,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Shape for Plane {
    fn intersection(&self, ray: Ray) -> IntersectionResult {
        let normal = self.normal.normalize();
        let denominator = ray.direction.dot(normal);
        if denominator.abs() < f32::EPSILON {
            return IntersectionResult::NoIntersection;
        }

        let t = -(ray.origin - self.origin).dot(normal) / denominator;
        if !ray.range().contains(&t) || !t.is_finite() {
            return IntersectionResult::NoIntersection;
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: LocalInfo {
                pos: ray.at(t),
                normal,
                material: self.material,
                object: Default::default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        material::MaterialId,
        math::point::Point,
        ray::Ray,
        shape::{IntersectionResult, Shape},
    };

    use super::Plane;

    #[test]
    fn plane() {
        let plane = Plane {
            origin: Point::new(0.0, -1.0, 0.0),
            normal: Vec3::Y,
            material: MaterialId(0),
        };

        let ray = Ray::new(Point::ORIGIN, Vec3::new(0.0, -1.0, -1.0));
        let IntersectionResult::Intersection(hit) = plane.intersection(ray) else {
            panic!("expected a hit");
        };
        assert!((hit.t - f32::sqrt(2.0)).abs() < 1e-5);
        assert!((hit.local_info.pos.vec() - Vec3::new(0.0, -1.0, -1.0)).length() < 1e-5);

        // Parallel and away from the plane
        assert!(!plane.intersection(Ray::new(Point::ORIGIN, Vec3::X)).is_intersection());
        assert!(!plane.intersection(Ray::new(Point::ORIGIN, Vec3::Y)).is_intersection());
    }
}
