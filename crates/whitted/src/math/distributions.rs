use std::ops::Deref;

use rand::{distributions::Uniform, prelude::Distribution, Rng};

/// Samples are expected to be in [0;1(^N
pub struct Samples<const N: usize>(pub [f32; N]);

impl<const N: usize> Deref for Samples<N> {
    type Target = [f32; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub trait Samplable<T, const N: usize> {
    fn sample_with(&self, samples: Samples<N>) -> T;
}

/// Uniform distribution over the unit disk
pub struct UniformUnitBall2;
impl Samplable<[f32; 2], 2> for UniformUnitBall2 {
    fn sample_with(&self, samples: Samples<2>) -> [f32; 2] {
        let phi = std::f32::consts::TAU * samples[0];
        let x = samples[1];
        let r = x.sqrt();
        let (s, c) = f32::sin_cos(phi);
        [r * c, r * s]
    }
}

impl Distribution<[f32; 2]> for UniformUnitBall2 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; 2] {
        let uniform = Uniform::new(0., 1.);
        self.sample_with(Samples([uniform.sample(rng), uniform.sample(rng)]))
    }
}
