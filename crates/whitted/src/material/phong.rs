use glam::Vec3;

use crate::{
    math::vec::{RefrReflVecExt, RgbAsVec3Ext},
    ray::Ray,
    shape::RayIntersection,
    Ctx,
};

use super::Material;

impl Material {
    /// Local illumination at `hit` following the Phong model.
    ///
    /// $I = k_e + k_a \cdot ambient + \sum_{lights} (diffuse + specular) \cdot color \cdot f(d) \cdot shadow$
    pub fn shade(&self, ctx: &mut Ctx, ray: Ray, hit: &RayIntersection) -> Vec3 {
        let world = ctx.world;
        let position = hit.local_info.pos;
        let normal = hit.local_info.normal;

        let mut color = self.ke.vec() + self.ka.vec() * world.ambient().vec();

        for light in world.lights {
            let light_dir = light.direction(position);

            let diffuse = f32::max(0.0, normal.dot(light_dir)) * self.kd.vec();

            let omega = light_dir.reflect(normal).normalize().dot(ray.direction);
            let specular = f32::max(0.0, omega).powf(self.shininess * 128.0) * self.ks.vec();

            let shadow = light.shadow_attenuation(ctx, position);
            let distance = light.distance_attenuation(position, &ctx.config.attenuation);

            color += (diffuse + specular) * light.color(position) * distance * shadow;
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color::{linear, Rgb},
        config::TraceConfig,
        light::{DirectionalLight, Light, PointLight},
        material::Material,
        math::{point::Point, vec::RgbAsVec3Ext},
        ray::Ray,
        scene::Scene,
        shape::{IntersectionResult, Shape, Sphere},
        Ctx, Seed,
    };

    const EPS: f32 = 1e-5;

    fn seed() -> Seed {
        Seed {
            seed: 0,
            x: 0,
            y: 0,
        }
    }

    fn scene_with(material: Material, lights: Vec<Light>) -> Scene {
        let mut scene = Scene::default();
        let id = scene.insert_material(None, material);
        scene.insert_object(Sphere {
            center: Point::new(0.0, 0.0, -3.0),
            radius: 1.0,
            material: id,
        });
        for light in lights {
            scene.insert_light(light);
        }
        scene
    }

    fn shade_center(scene: &Scene, config: &TraceConfig) -> Vec3 {
        let world = scene.world();
        let mut ctx = Ctx::new(&world, config, seed());
        let ray = Ray::new(Point::ORIGIN, Vec3::NEG_Z);
        let IntersectionResult::Intersection(hit) = world.objects.intersection(ray) else {
            panic!("expected a hit");
        };
        world
            .material(hit.local_info.material)
            .shade(&mut ctx, ray, &hit)
    }

    #[test]
    fn no_light_is_emissive_plus_ambient() {
        let material = Material {
            ke: Rgb::from_array([0.1, 0.2, 0.3]),
            ka: Rgb::splat(0.5),
            kd: linear::WHITE,
            ..Default::default()
        };
        let scene = scene_with(material, vec![]);
        let color = shade_center(&scene, &TraceConfig::default());

        // Default ambient light is 0.1
        assert!((color - Vec3::new(0.15, 0.25, 0.35)).length() < EPS);
    }

    #[test]
    fn global_ambient() {
        let material = Material {
            ka: Rgb::splat(0.5),
            ..Default::default()
        };
        let mut scene = scene_with(material, vec![]);
        scene.set_ambient(Rgb::from_array([1.0, 0.0, 0.5]));
        let color = shade_center(&scene, &TraceConfig::default());
        assert!((color - Vec3::new(0.5, 0.0, 0.25)).length() < EPS);
    }

    #[test]
    fn light_behind_surface_does_not_contribute() {
        let material = Material {
            kd: linear::WHITE,
            ks: linear::WHITE,
            shininess: 1.0,
            ..Default::default()
        };
        let light = Light::Directional(DirectionalLight {
            // Lights the far side of the sphere
            orientation: Vec3::Z,
            color: linear::WHITE,
        });
        let scene = scene_with(material, vec![light]);
        let color = shade_center(&scene, &TraceConfig::default());
        assert!(color.length() < EPS);
    }

    #[test]
    fn point_light_is_attenuated_with_distance() {
        let material = Material {
            kd: linear::WHITE,
            ..Default::default()
        };
        let light = Light::Point(PointLight {
            position: Point::new(0.0, 0.0, 8.0),
            color: linear::WHITE,
        });
        let scene = scene_with(material, vec![light]);
        let config = TraceConfig::default();
        let color = shade_center(&scene, &config);

        // Hit point is (0, 0, -2), 10 units away from the light, straight under it
        let expected = config.attenuation.at(10.0) * linear::WHITE.vec();
        assert!(expected.x < 1.0);
        assert!((color - expected).length() < EPS);
    }
}
