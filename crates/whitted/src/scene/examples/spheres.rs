use glam::Vec3;

use crate::{
    color::Rgb,
    light::{DirectionalLight, PointLight},
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{Plane, Sphere},
};

/// An opaque, a mirror and a glass sphere standing on a floor
pub struct SpheresScene;
impl From<SpheresScene> for Scene {
    fn from(_: SpheresScene) -> Self {
        let mut scene = Scene::default();
        let floor = scene.insert_material(
            Some("Floor".to_owned()),
            Material::diffuse(Rgb::from_array([0.2, 0.3, 0.7])),
        );
        let plastic = scene.insert_material(
            Some("Plastic".to_owned()),
            Material {
                ks: Rgb::splat(0.6),
                shininess: 0.3,
                ..Material::diffuse(Rgb::from_array([0.2, 0.9, 0.7]))
            },
        );
        let mirror = scene.insert_material(
            Some("Mirror".to_owned()),
            Material {
                kd: Rgb::splat(0.05),
                ks: Rgb::splat(0.9),
                shininess: 0.9,
                ..Material::mirror()
            },
        );
        let glass = scene.insert_material(Some("Glass".to_owned()), Material::transparent(1.5));

        scene.insert_object(Plane {
            origin: Point::new(0.0, -1.0, 0.0),
            normal: Vec3::Y,
            material: floor,
        });
        scene.insert_object(Sphere {
            center: Point::new(-1.2, -0.4, -4.0),
            radius: 0.6,
            material: plastic,
        });
        scene.insert_object(Sphere {
            center: Point::new(0.6, 0.0, -5.0),
            radius: 1.0,
            material: mirror,
        });
        scene.insert_object(Sphere {
            center: Point::new(0.2, -0.6, -2.5),
            radius: 0.4,
            material: glass,
        });

        scene.insert_light(PointLight {
            position: Point::new(-1.0, 2.0, -2.0),
            color: Rgb::from_array([1.0, 0.95, 0.9]),
        });
        scene.insert_light(DirectionalLight {
            orientation: Vec3::new(1.0, -1.0, -0.5),
            color: Rgb::splat(0.4),
        });
        scene
    }
}
