use crate::{
    camera::Camera,
    color::Rgb,
    config::TraceConfig,
    integrators::WhittedIntegrator,
    light::Light,
    material::{Material, MaterialDescriptor, MaterialId},
    shape::Shape,
    Ctx, Seed,
};

/// Ambient light used when the scene does not set one
pub const DEFAULT_AMBIENT: f32 = 0.1;

/// Read-only view of a scene, shared by every pixel
pub struct World<'a> {
    pub objects: &'a dyn Shape,
    pub lights: &'a [Light],
    pub materials: &'a [MaterialDescriptor],
    pub ambient: Option<Rgb>,
}

impl<'a> World<'a> {
    pub fn material(&self, id: MaterialId) -> &'a Material {
        &self.materials[id.0].material
    }

    pub fn ambient(&self) -> Rgb {
        self.ambient.unwrap_or(Rgb::splat(DEFAULT_AMBIENT))
    }
}

/// Turns pixels into colors
pub struct Renderer<'a> {
    pub world: World<'a>,
    pub camera: Camera,
    pub config: TraceConfig,
    pub integrator: WhittedIntegrator,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

impl<'a> Renderer<'a> {
    /// Color of the pixel at column `i` and row `j`, rows going top to bottom
    pub fn trace_pixel(&self, i: u32, j: u32) -> Rgb {
        let x = (i as f32 + 0.5) / self.width as f32;
        let y = 1.0 - (j as f32 + 0.5) / self.height as f32;

        let mut ctx = Ctx::new(
            &self.world,
            &self.config,
            Seed {
                seed: self.seed,
                x: i,
                y: j,
            },
        );
        self.integrator.trace(&mut ctx, &self.camera, x, y)
    }

    /// Colors of the `j`-th row, left to right
    pub fn trace_line(&self, j: u32) -> Vec<Rgb> {
        (0..self.width).map(|i| self.trace_pixel(i, j)).collect()
    }
}
