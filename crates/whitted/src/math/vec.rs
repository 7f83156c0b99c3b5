pub use glam::Vec3;

use crate::{color::Rgb, ray::RAY_EPSILON};

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb {
        Rgb::from_array(self.to_array())
    }
}

pub trait RefrReflVecExt {
    /// Bend `self` through an interface going from a medium of index `n1` to a medium of index `n2`.
    ///
    /// `normal` may point on either side of the interface.
    /// Returns `None` on total internal reflection.
    fn refract(self, normal: Vec3, n1: f32, n2: f32) -> Option<Vec3>;

    /// Mirror `self` about `normal`: $L = V - 2(N \cdot V)N$
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl RefrReflVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }

    fn refract(self, normal: Vec3, n1: f32, n2: f32) -> Option<Vec3> {
        let incident = self.normalize();

        // Going straight through the interface, nothing to bend
        if (normal.dot(incident).abs() - 1.0).abs() < RAY_EPSILON {
            return Some(self);
        }
        if n1 == n2 {
            return Some(self);
        }

        let normal = -normal.same_direction(incident);
        let cos_i = -normal.dot(incident);
        let sin_i = f32::sqrt(f32::max(0.0, 1.0 - cos_i * cos_i));

        if n1 > n2 && sin_i + RAY_EPSILON >= n2 / n1 {
            crate::counter!("Total internal reflections");
            return None;
        }

        let eta = n1 / n2;
        let sin_t = eta * sin_i;
        let cos_t = f32::sqrt(f32::max(0.0, 1.0 - sin_t * sin_t));

        Some((eta * incident + (eta * cos_i - cos_t) * normal).normalize())
    }
}

pub trait Vec3SameDirExt {
    fn same_direction(self, other: Self) -> Self;
}

impl Vec3SameDirExt for Vec3 {
    /// Return self if self and other are pointing in the same general direction (self.dot(other) > 0.0) else, returns -self
    fn same_direction(self, other: Self) -> Self {
        if self.dot(other) > 0.0 {
            self
        } else {
            -self
        }
    }
}
