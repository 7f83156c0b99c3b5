pub mod examples;

use crate::{
    aggregate::ShapeList,
    color::Rgb,
    light::Light,
    material::{Material, MaterialDescriptor, MaterialId},
    renderer::World,
    shape::{ObjectId, Shape},
};

/// Owns everything that is rendered.
///
/// A scene is built once then only read through the [World] it hands out.
#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
    pub materials: Vec<MaterialDescriptor>,
    pub lights: Vec<Light>,
    /// Global ambient light, the renderer falls back to a dim grey when unset
    pub ambient: Option<Rgb>,
}

impl Scene {
    /// Insert an object in the scene
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) -> ObjectId {
        self.objects.push(object)
    }

    /// Insert a light in the scene
    pub fn insert_light<L: Into<Light>>(&mut self, light: L) {
        self.lights.push(light.into());
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, label: Option<String>, material: Material) -> MaterialId {
        self.materials.push(MaterialDescriptor { label, material });
        MaterialId(self.materials.len() - 1)
    }

    pub fn set_ambient(&mut self, ambient: Rgb) {
        self.ambient = Some(ambient);
    }

    pub fn world(&self) -> World {
        World {
            objects: &self.objects,
            lights: &self.lights,
            materials: &self.materials,
            ambient: self.ambient,
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("objects", &self.objects.0.len())
            .field("materials", &self.materials)
            .field("lights", &self.lights)
            .field("ambient", &self.ambient)
            .finish()
    }
}
