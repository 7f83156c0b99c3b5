//! Direction sampling around a base direction, used for soft shadows, glossy reflection and motion blur.

use glam::Vec3;
use rand::{prelude::Distribution, Rng};

use crate::math::distributions::UniformUnitBall2;

/// Orthonormal frame built around a forward direction
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Frame {
    pub fn around(direction: Vec3) -> Self {
        let forward = direction.normalize();
        let helper = if forward.dot(Vec3::Y).abs() > 0.999 {
            Vec3::X
        } else {
            Vec3::Y
        };
        let right = forward.cross(helper).normalize();
        let up = right.cross(forward);

        Self { forward, right, up }
    }
}

/// `count` unit directions taken uniformly in a disk of radius `radius` centered on `base`,
/// lying in the plane orthogonal to `base` at unit distance.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, base: Vec3, radius: f32, count: u32) -> Vec<Vec3> {
    let frame = Frame::around(base);
    (0..count)
        .map(|_| {
            let [u, v] = UniformUnitBall2.sample(rng);
            (frame.forward + radius * (u * frame.right + v * frame.up)).normalize()
        })
        .collect()
}

/// `count` unit directions sliding sideways from `base`, the i-th being offset by `(i + 1) * step`.
///
/// Sideways is `base × up`, `up` being the world up.
pub fn lateral_sweep(base: Vec3, step: f32, count: u32) -> Vec<Vec3> {
    let frame = Frame::around(base);
    (1..=count)
        .map(|i| (frame.forward + (i as f32 * step) * frame.right).normalize())
        .collect()
}
