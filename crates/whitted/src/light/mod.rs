//! Light sources.
//!
//! A light answers four questions about a surface point: where is it (direction), what color is it,
//! how much does its intensity fall off with distance, and how much of it makes it through the
//! geometry standing in between (shadow).

use glam::Vec3;

use crate::{
    config::DistanceAttenuation,
    counter,
    color::Rgb,
    math::{point::Point, vec::RgbAsVec3Ext},
    ray::Ray,
    renderer::World,
    sampler,
    shape::IntersectionResult,
    Ctx,
};

/// A light infinitely far away, lighting the whole scene from the same direction
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Direction the light travels in
    pub orientation: Vec3,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub struct PointLight {
    pub position: Point,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    pub fn color(&self, _p: Point) -> Vec3 {
        match self {
            Light::Directional(light) => light.color.vec(),
            Light::Point(light) => light.color.vec(),
        }
    }

    /// Unit vector going from `p` toward the light
    pub fn direction(&self, p: Point) -> Vec3 {
        match self {
            Light::Directional(light) => -light.orientation.normalize(),
            Light::Point(light) => (light.position - p).normalize(),
        }
    }

    /// Distance between `p` and the light, anything further away can not cast a shadow
    fn distance(&self, p: Point) -> f32 {
        match self {
            Light::Directional(_) => f32::INFINITY,
            Light::Point(light) => light.position.distance(p),
        }
    }

    pub fn distance_attenuation(&self, p: Point, attenuation: &DistanceAttenuation) -> f32 {
        match self {
            Light::Directional(_) => 1.0,
            Light::Point(light) => attenuation.at(light.position.distance(p)),
        }
    }

    /// How much of the light reaches `p`.
    ///
    /// An unoccluded sample is worth the light color, an occluded one is worth the `kt` of the occluder:
    /// opaque objects cast black shadows, transmissive ones tint them.
    /// With soft shadows, the sample toward the light is averaged with jittered samples around it.
    pub fn shadow_attenuation(&self, ctx: &mut Ctx, p: Point) -> Vec3 {
        let direction = self.direction(p);
        let max_distance = self.distance(p);
        let sharp = self.shadow_sample(ctx.world, p, direction, max_distance);

        if !ctx.config.soft_shadows {
            return sharp;
        }

        let samples = sampler::jitter(
            &mut ctx.rng,
            direction,
            ctx.config.soft_shadow_radius,
            ctx.config.soft_shadow_samples,
        );
        let sample_count = samples.len() + 1;

        samples
            .into_iter()
            .map(|direction| self.shadow_sample(ctx.world, p, direction, max_distance))
            .fold(sharp, |acc, sample| acc + sample)
            / sample_count as f32
    }

    fn shadow_sample(&self, world: &World, p: Point, direction: Vec3, max_distance: f32) -> Vec3 {
        counter!("Shadow rays");
        let shadow_ray = Ray::spawn(p, direction);

        match world.objects.intersection(shadow_ray) {
            // Occluders behind the light do not count
            IntersectionResult::Intersection(hit) if hit.t < max_distance => {
                world.material(hit.local_info.material).kt.vec()
            }
            _ => self.color(p),
        }
    }
}

impl From<DirectionalLight> for Light {
    fn from(val: DirectionalLight) -> Self {
        Light::Directional(val)
    }
}

impl From<PointLight> for Light {
    fn from(val: PointLight) -> Self {
        Light::Point(val)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color::{linear, Rgb},
        config::{DistanceAttenuation, TraceConfig},
        material::Material,
        math::point::Point,
        scene::Scene,
        shape::{Cuboid, Plane},
        Ctx, Seed,
    };

    use super::{DirectionalLight, Light, PointLight};

    const EPS: f32 = 1e-5;

    fn seed() -> Seed {
        Seed {
            seed: 42,
            x: 1,
            y: 2,
        }
    }

    fn sun() -> Light {
        Light::Directional(DirectionalLight {
            orientation: Vec3::NEG_Y,
            color: Rgb::from_array([1.0, 0.9, 0.8]),
        })
    }

    fn occluder_scene(kt: Rgb, height: f32) -> Scene {
        let mut scene = Scene::default();
        let occluder = scene.insert_material(
            None,
            Material {
                kt,
                ..Default::default()
            },
        );
        scene.insert_object(Plane {
            origin: Point::new(0.0, height, 0.0),
            normal: Vec3::NEG_Y,
            material: occluder,
        });
        scene
    }

    #[test]
    fn directional_light() {
        let light = sun();
        let p = Point::new(3.0, -2.0, 1.0);
        assert_eq!(light.direction(p), Vec3::Y);
        assert_eq!(
            light.distance_attenuation(p, &DistanceAttenuation::default()),
            1.0
        );
        assert_eq!(light.color(p), Vec3::new(1.0, 0.9, 0.8));
    }

    #[test]
    fn point_light_attenuation_is_bounded_and_decreasing() {
        let light = Light::Point(PointLight {
            position: Point::ORIGIN,
            color: linear::WHITE,
        });
        let attenuation = DistanceAttenuation::default();
        let mut previous = f32::INFINITY;
        for i in 0..200 {
            let p = Point::new(0.0, 0.0, i as f32 * 0.25);
            let current = light.distance_attenuation(p, &attenuation);
            assert!((0.0..=1.0).contains(&current));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn unoccluded_is_light_color() {
        let scene = Scene::default();
        let world = scene.world();
        let config = TraceConfig::default();
        let mut ctx = Ctx::new(&world, &config, seed());

        let light = sun();
        assert_eq!(
            light.shadow_attenuation(&mut ctx, Point::ORIGIN),
            light.color(Point::ORIGIN)
        );
    }

    #[test]
    fn occluded_is_occluder_transmission() {
        let config = TraceConfig::default();

        let opaque = occluder_scene(linear::BLACK, 1.0);
        let world = opaque.world();
        let mut ctx = Ctx::new(&world, &config, seed());
        assert_eq!(sun().shadow_attenuation(&mut ctx, Point::ORIGIN), Vec3::ZERO);

        let tinted = occluder_scene(Rgb::from_array([0.5, 0.25, 0.0]), 1.0);
        let world = tinted.world();
        let mut ctx = Ctx::new(&world, &config, seed());
        assert_eq!(
            sun().shadow_attenuation(&mut ctx, Point::ORIGIN),
            Vec3::new(0.5, 0.25, 0.0)
        );
    }

    #[test]
    fn point_light_ignores_occluders_behind_it() {
        let config = TraceConfig::default();
        let light = Light::Point(PointLight {
            position: Point::new(0.0, 1.0, 0.0),
            color: linear::WHITE,
        });

        let behind = occluder_scene(linear::BLACK, 2.0);
        let world = behind.world();
        let mut ctx = Ctx::new(&world, &config, seed());
        assert_eq!(light.shadow_attenuation(&mut ctx, Point::ORIGIN), Vec3::ONE);

        let between = occluder_scene(linear::BLACK, 0.5);
        let world = between.world();
        let mut ctx = Ctx::new(&world, &config, seed());
        assert_eq!(light.shadow_attenuation(&mut ctx, Point::ORIGIN), Vec3::ZERO);
    }

    #[test]
    fn soft_shadow_fully_occluded() {
        let config = TraceConfig {
            soft_shadows: true,
            ..Default::default()
        };
        let kt = Rgb::from_array([0.5, 0.5, 0.5]);
        let scene = occluder_scene(kt, 1.0);
        let world = scene.world();
        let mut ctx = Ctx::new(&world, &config, seed());

        let shadow = sun().shadow_attenuation(&mut ctx, Point::ORIGIN);
        assert!((shadow - Vec3::splat(0.5)).length() < EPS);
    }

    #[test]
    fn soft_shadow_penumbra() {
        let config = TraceConfig {
            soft_shadows: true,
            soft_shadow_samples: 4000,
            ..Default::default()
        };
        let tint = 0.2;
        let mut scene = Scene::default();
        let occluder = scene.insert_material(
            None,
            Material {
                kt: Rgb::splat(tint),
                ..Default::default()
            },
        );
        // Hides the half sky x > 0
        scene.insert_object(Cuboid {
            min: Point::new(0.0, 1.0, -10.0),
            max: Point::new(10.0, 2.0, 10.0),
            material: occluder,
        });
        let world = scene.world();
        let mut ctx = Ctx::new(&world, &config, seed());

        let light = Light::Directional(DirectionalLight {
            orientation: Vec3::NEG_Y,
            color: linear::WHITE,
        });
        let shadow = light.shadow_attenuation(&mut ctx, Point::new(-1e-3, 0.0, 0.0));

        // About half the samples are occluded
        let expected = 0.5 * 1.0 + 0.5 * tint;
        for channel in shadow.to_array() {
            assert!((channel - expected).abs() < 0.03, "{channel} != {expected}");
        }
    }
}
