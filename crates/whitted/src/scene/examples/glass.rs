use glam::Vec3;

use crate::{
    color::{linear, Rgb},
    light::{DirectionalLight, PointLight},
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{Cuboid, Sphere},
};

/// A glass sphere holding a smaller sphere of water, in front of a checker made of boxes
pub struct GlassScene;
impl From<GlassScene> for Scene {
    fn from(_: GlassScene) -> Self {
        let mut scene = Scene::default();
        let black = scene.insert_material(
            Some("Black".to_owned()),
            Material::diffuse(Rgb::splat(0.05)),
        );
        let white = scene.insert_material(Some("White".to_owned()), Material::diffuse(Rgb::splat(0.9)));
        let glass = scene.insert_material(Some("Glass".to_owned()), Material::transparent(1.5));
        let water = scene.insert_material(
            Some("Water".to_owned()),
            Material {
                kt: Rgb::from_array([0.8, 0.9, 1.0]),
                ..Material::transparent(1.33)
            },
        );

        for i in -4..4 {
            for j in -3..3 {
                let material = if (i + j) % 2 == 0 { white } else { black };
                let (x, y) = (i as f32, j as f32);
                scene.insert_object(Cuboid {
                    min: Point::new(x, y, -8.0),
                    max: Point::new(x + 1.0, y + 1.0, -7.5),
                    material,
                });
            }
        }

        scene.insert_object(Sphere {
            center: Point::new(0.0, 0.0, -4.0),
            radius: 1.2,
            material: glass,
        });
        scene.insert_object(Sphere {
            center: Point::new(0.0, 0.0, -4.0),
            radius: 0.5,
            material: water,
        });

        scene.insert_light(PointLight {
            position: Point::new(0.0, 0.0, -1.0),
            color: linear::WHITE,
        });
        scene.insert_light(DirectionalLight {
            orientation: Vec3::new(0.0, 0.0, -1.0),
            color: Rgb::splat(0.5),
        });
        scene
    }
}

#[cfg(test)]
mod tests {
    use crate::scene::Scene;

    use super::GlassScene;

    #[test]
    fn scene_content() {
        let scene = Scene::from(GlassScene);
        // 48 boxes and 2 spheres
        assert_eq!(scene.objects.0.len(), 50);
        assert_eq!(scene.materials.len(), 4);
        assert_eq!(scene.lights.len(), 2);
    }
}
