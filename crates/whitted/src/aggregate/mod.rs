pub mod shapelist;

pub use shapelist::ShapeList;
