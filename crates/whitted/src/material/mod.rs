mod phong;

use crate::color::{linear, Rgb};

/// Surface description used by the Phong model and by the recursive tracer.
///
/// Materials are never mutated once inserted into a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Emissive
    pub ke: Rgb,
    /// Ambient
    pub ka: Rgb,
    /// Diffuse
    pub kd: Rgb,
    /// Specular
    pub ks: Rgb,
    /// Transmissive
    pub kt: Rgb,
    /// Reflective
    pub kr: Rgb,
    /// Specular exponent, scaled by 128 when shading
    pub shininess: f32,
    /// Index of refraction
    pub index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ke: linear::BLACK,
            ka: linear::BLACK,
            kd: linear::BLACK,
            ks: linear::BLACK,
            kt: linear::BLACK,
            kr: linear::BLACK,
            shininess: 0.0,
            index: 1.0,
        }
    }
}

impl Material {
    /// A matte surface
    pub fn diffuse(color: Rgb) -> Self {
        Self {
            ka: color,
            kd: color,
            ..Default::default()
        }
    }

    /// A perfect mirror
    pub fn mirror() -> Self {
        Self {
            kr: linear::WHITE,
            ..Default::default()
        }
    }

    /// A clear glass-like material
    pub fn transparent(index: f32) -> Self {
        Self {
            ks: Rgb::splat(0.8),
            kt: linear::WHITE,
            shininess: 0.8,
            index,
            ..Default::default()
        }
    }

    pub fn emissive(color: Rgb) -> Self {
        Self {
            ke: color,
            ..Default::default()
        }
    }

    pub fn is_transmissive(&self) -> bool {
        !self.kt.is_black()
    }

    pub fn is_reflective(&self) -> bool {
        !self.kr.is_black()
    }
}

pub struct MaterialDescriptor {
    pub label: Option<String>,
    pub material: Material,
}

impl std::fmt::Debug for MaterialDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialDescriptor")
            .field("label", &self.label)
            .field("material", &self.material)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);
