pub mod aggregate;
pub mod camera;
pub mod color;
pub mod config;
pub mod integrators;
pub mod light;
pub mod material;
pub mod math;
pub mod medium;
pub mod ray;
pub mod renderer;
pub mod sampler;
pub mod scene;
pub mod shape;
pub mod utils;

pub use rand_xoshiro::Xoshiro256StarStar as Rng;

/// Everything a single pixel evaluation needs.
///
/// A `Ctx` is owned by one pixel: the world and the configuration are shared read-only,
/// the rng is private.
pub struct Ctx<'a> {
    pub rng: Rng,
    pub world: &'a renderer::World<'a>,
    pub config: &'a config::TraceConfig,
}

impl<'a> Ctx<'a> {
    pub fn new(world: &'a renderer::World<'a>, config: &'a config::TraceConfig, seed: Seed) -> Self {
        Self {
            rng: seed.into_rng(),
            world,
            config,
        }
    }
}

#[derive(Debug, Copy, Clone, Hash)]
#[repr(C)]
pub struct Seed {
    pub seed: u64,
    pub x: u32,
    pub y: u32,
}

impl Seed {
    pub fn into_rng(self) -> Rng {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        std::hash::Hash::hash(&self, &mut hasher);
        <Rng as rand::SeedableRng>::seed_from_u64(std::hash::Hasher::finish(&hasher))
    }
}
