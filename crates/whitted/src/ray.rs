use std::ops::{Range, RangeInclusive};

use crate::math::point::Point;

use super::math::vec::Vec3;

/// Distance under which a hit is considered to be on the surface the ray starts from.
pub const RAY_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (0.0, f32::INFINITY),
        }
    }

    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    /// A ray leaving a surface at `origin`: it can not hit the surface it starts from
    pub fn spawn(origin: Point, direction: Vec3) -> Self {
        Self::new_with_range(origin, direction, RAY_EPSILON..f32::INFINITY)
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        if !self.range().contains(&t) {
            crate::error_once!("a ray has been accessed out of bounds");
        }

        self.at_unchecked(t)
    }
    pub fn at_unchecked(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}
