//! Integrators turn a camera ray into a color.

mod whitted;

pub use whitted::WhittedIntegrator;
