mod glass;
mod mirror;
mod spheres;

pub use glass::GlassScene;
pub use mirror::MirrorScene;
pub use spheres::SpheresScene;
