use crate::material::MaterialId;

/// A medium a ray travels through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    /// The material of the object the ray is inside of, `None` for the ambient medium
    pub material: Option<MaterialId>,
    pub index: f32,
}

/// Stack of the media a ray is nested in.
///
/// The bottom is always the ambient medium and is never popped.
/// Each branch of the ray tree owns its own copy, so siblings never see each other's transitions.
#[derive(Debug, Clone)]
pub struct MediumStack {
    ambient: Medium,
    nested: Vec<Medium>,
}

impl MediumStack {
    pub fn new(ambient_index: f32) -> Self {
        Self {
            ambient: Medium {
                material: None,
                index: ambient_index,
            },
            nested: Vec::new(),
        }
    }

    /// The medium the ray is currently traveling through
    pub fn top(&self) -> Medium {
        self.nested.last().copied().unwrap_or(self.ambient)
    }

    /// Is the ray currently inside an object made of `material`
    pub fn is_inside(&self, material: MaterialId) -> bool {
        self.top().material == Some(material)
    }

    pub fn push(&mut self, material: MaterialId, index: f32) {
        self.nested.push(Medium {
            material: Some(material),
            index,
        });
    }

    pub fn pop(&mut self) -> Option<Medium> {
        self.nested.pop()
    }

    /// Number of media above the ambient one
    pub fn depth(&self) -> usize {
        self.nested.len()
    }
}
