use crate::{material::MaterialId, math::point::Point, ray::Ray};

use super::{IntersectionResult, LocalInfo, RayIntersection, Shape};

/// A simple sphere shape.
///
/// Normals are pointing outwards if `radius` is positive, and are reversed if `radius` is negative
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
    pub material: MaterialId,
}

impl Shape for Sphere {
    fn intersection(&self, ray: Ray) -> IntersectionResult {
        let a = ray.direction.length_squared();
        let b_half = (ray.origin - self.center).dot(ray.direction);
        let c = (ray.origin - self.center).length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter <= 0.0 {
            return IntersectionResult::NoIntersection;
        }

        // Either find first hit if hit is in range else, find the second hit
        let t = {
            let range = ray.range();
            let near = (-b_half - f32::sqrt(discriminant_quarter)) / a;
            let far = (-b_half + f32::sqrt(discriminant_quarter)) / a;
            if range.contains(&near) {
                near
            } else if range.contains(&far) {
                far
            } else {
                return IntersectionResult::NoIntersection;
            }
        };

        let pos = ray.at(t);
        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: LocalInfo {
                pos,
                normal: self.radius.signum() * (pos - self.center).normalize(),
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

    use super::Sphere;

    fn unit_sphere() -> Sphere {
        Sphere {
            center: Point::new(0.0, 0.0, -3.0),
            radius: 1.0,
            material: MaterialId(0),
        }
    }

    #[test]
    fn hit_from_outside() {
        let ray = Ray::new(Point::ORIGIN, Vec3::NEG_Z);
        let IntersectionResult::Intersection(hit) = unit_sphere().intersection(ray) else {
            panic!("expected a hit");
        };
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert!((hit.local_info.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn hit_from_inside() {
        let ray = Ray::spawn(Point::new(0.0, 0.0, -3.0), Vec3::X);
        let IntersectionResult::Intersection(hit) = unit_sphere().intersection(ray) else {
            panic!("expected a hit");
        };
        assert!((hit.t - 1.0).abs() < 1e-5);
        // Normal still points outside
        assert!((hit.local_info.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn miss() {
        let ray = Ray::new(Point::ORIGIN, Vec3::Z);
        assert!(!unit_sphere().intersection(ray).is_intersection());
        let ray = Ray::new(Point::ORIGIN, Vec3::new(0.0, 1.0, -1.0));
        assert!(!unit_sphere().intersection(ray).is_intersection());
    }
}
