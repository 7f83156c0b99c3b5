use glam::Vec3;

use crate::{
    camera::Camera,
    color::Rgb,
    config::TraceConfig,
    counter,
    math::vec::{RefrReflVecExt, RgbAsVec3Ext, Vec3AsRgbExt},
    medium::MediumStack,
    ray::Ray,
    sampler,
    shape::IntersectionResult,
    Ctx,
};

/// Recursive ray tracer: direct Phong lighting plus perfect specular reflection and refraction.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhittedIntegrator;

impl WhittedIntegrator {
    /// Color seen through the point `(x, y)` of the projection plane, clamped to a displayable range.
    ///
    /// With motion blur, the primary ray is averaged with rays sliding sideways.
    pub fn trace(&self, ctx: &mut Ctx, camera: &Camera, x: f32, y: f32) -> Rgb {
        counter!("Primary rays");
        let ray = camera.ray_through(x, y);

        let media = MediumStack::new(ctx.config.ambient_index);
        let mut color = self.evaluate(ctx, ray, 0, media.clone());

        if ctx.config.motion_blur {
            let directions = sampler::lateral_sweep(
                ray.direction,
                ctx.config.motion_blur_step,
                TraceConfig::MOTION_BLUR_SAMPLES,
            );
            let sample_count = directions.len() + 1;

            for direction in directions {
                let blurred = Ray::new(ray.origin, direction);
                color += self.evaluate(ctx, blurred, 0, media.clone());
            }
            color /= sample_count as f32;
        }

        color.rgb().clamp()
    }

    /// Unclamped color carried back along `ray`.
    ///
    /// `media` is owned: reflected and refracted rays each get their own copy, so entering an object on
    /// one branch is never seen by the other.
    pub fn evaluate(&self, ctx: &mut Ctx, ray: Ray, depth: u32, mut media: MediumStack) -> Vec3 {
        if depth > ctx.config.max_depth {
            return Vec3::ZERO;
        }

        let world = ctx.world;
        let IntersectionResult::Intersection(hit) = world.objects.intersection(ray) else {
            return Vec3::ZERO;
        };

        let material_id = hit.local_info.material;
        let material = world.material(material_id);
        let position = hit.local_info.pos;

        let local = material.shade(ctx, ray, &hit);
        // Dim surfaces are not refined any further
        if ctx.config.threshold > local.length() {
            return local;
        }

        let inside = media.is_inside(material_id);
        let normal = if inside {
            -hit.local_info.normal
        } else {
            hit.local_info.normal
        };

        let mut color = local;

        if material.is_reflective() {
            counter!("Reflected rays");
            let mirror = ray.direction.reflect(normal).normalize();
            let mut reflection =
                self.evaluate(ctx, Ray::spawn(position, mirror), depth + 1, media.clone());

            if ctx.config.glossy_reflection {
                // NOTE: samples start at the deepest level rather than `depth + 1`,
                // their own reflections and refractions are cut right away
                let sample_depth = u32::max(depth + 1, ctx.config.max_depth);
                let samples = sampler::jitter(
                    &mut ctx.rng,
                    mirror,
                    ctx.config.glossy_radius,
                    ctx.config.glossy_samples,
                );
                let sample_count = samples.len() + 1;

                for direction in samples {
                    reflection += self.evaluate(
                        ctx,
                        Ray::spawn(position, direction),
                        sample_depth,
                        media.clone(),
                    );
                }
                reflection /= sample_count as f32;
            }

            color += reflection * material.kr.vec();
        }

        if material.is_transmissive() {
            'refraction: {
                let n1 = media.top().index;
                let n2 = if inside {
                    media.pop();
                    media.top().index
                } else {
                    media.push(material_id, material.index);
                    material.index
                };

                // Total internal reflection, the reflected branch already accounts for it
                let Some(refracted) = ray.direction.refract(normal, n1, n2) else {
                    break 'refraction;
                };

                counter!("Refracted rays");
                let transmitted =
                    self.evaluate(ctx, Ray::spawn(position, refracted), depth + 1, media);
                color += transmitted * material.kt.vec();
            }
        }

        color
    }
}
