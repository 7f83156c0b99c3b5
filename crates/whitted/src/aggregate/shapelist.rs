use crate::{
    ray::Ray,
    shape::{IntersectionResult, ObjectId, Shape},
};

/// The simplest aggregate: every shape is tested against every ray.
///
/// Hits are tagged with the [ObjectId] of the shape that produced them, its index in the list.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl ShapeList {
    pub fn push<T: Shape + 'static>(&mut self, shape: T) -> ObjectId {
        self.0.push(Box::new(shape));
        ObjectId(self.0.len() - 1)
    }
}

impl Shape for ShapeList {
    fn intersection(&self, mut ray: Ray) -> IntersectionResult {
        let mut res = IntersectionResult::NoIntersection;

        for (index, shape) in self.0.iter().enumerate() {
            if ray.range().is_empty() {
                break;
            }

            if let IntersectionResult::Intersection(mut record) = shape.intersection(ray) {
                // Only closer hits are searched from now on
                ray.bounds.1 = record.t;
                record.local_info.object = ObjectId(index);
                res = IntersectionResult::Intersection(record);
            }
        }
        res
    }
}
