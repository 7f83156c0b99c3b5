use glam::Vec3;

use crate::{math::point::Point, ray::Ray};

/// A pinhole camera.
///
/// The projection plane sits at unit distance in front of the eye and is spanned by `u` (horizontal)
/// and `v` (vertical), their length being the size of the plane.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point,
    /// Unit vector from the eye to the center of the projection plane
    pub look: Vec3,
    pub u: Vec3,
    pub v: Vec3,
}

impl Camera {
    /// `vfov` is the vertical field of view, in radians
    pub fn look_at(eye: Point, target: Point, up: Vec3, vfov: f32, aspect_ratio: f32) -> Self {
        let look = (target - eye).normalize();
        let right = look.cross(up).normalize();
        let up = right.cross(look);

        let height = 2.0 * f32::tan(vfov / 2.0);
        Self {
            eye,
            look,
            u: height * aspect_ratio * right,
            v: height * up,
        }
    }

    /// Ray going through the projection plane at `(x, y)`.
    ///
    /// Both are in $\left[0, 1\right]$, $\left(0, 0\right)$ being the bottom left corner.
    pub fn ray_through(&self, x: f32, y: f32) -> Ray {
        let direction = self.look + (x - 0.5) * self.u + (y - 0.5) * self.v;
        Ray::new(self.eye, direction)
    }
}

impl Default for Camera {
    /// Looking at -Z from the origin, with a 90° square field of view
    fn default() -> Self {
        Self::look_at(
            Point::ORIGIN,
            Point::new(0.0, 0.0, -1.0),
            Vec3::Y,
            std::f32::consts::FRAC_PI_2,
            1.0,
        )
    }
}
