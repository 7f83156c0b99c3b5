use glam::Vec3;

use crate::{
    color::{linear, Rgb},
    light::PointLight,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{Cuboid, Plane},
};

/// A perfect mirror behind a red box, the camera sees both the box and its reflection
pub struct MirrorScene;
impl From<MirrorScene> for Scene {
    fn from(_: MirrorScene) -> Self {
        let mut scene = Scene::default();
        let mirror = scene.insert_material(Some("Mirror".to_owned()), Material::mirror());
        let wall = scene.insert_material(
            Some("Wall".to_owned()),
            Material::diffuse(Rgb::from_array([0.9, 0.8, 0.3])),
        );
        let red = scene.insert_material(Some("Red".to_owned()), Material::diffuse(linear::RED));

        scene.insert_object(Plane {
            origin: Point::new(0.0, 0.0, -6.0),
            normal: Vec3::new(0.3, 0.0, 1.0),
            material: mirror,
        });
        // Behind the camera, only visible in the mirror
        scene.insert_object(Plane {
            origin: Point::new(0.0, 0.0, 2.0),
            normal: Vec3::NEG_Z,
            material: wall,
        });
        scene.insert_object(Cuboid {
            min: Point::new(-1.5, -1.0, -4.5),
            max: Point::new(-0.5, 0.0, -3.5),
            material: red,
        });

        scene.insert_light(PointLight {
            position: Point::new(0.0, 1.5, -1.0),
            color: linear::WHITE,
        });
        scene.set_ambient(Rgb::splat(0.05));
        scene
    }
}
