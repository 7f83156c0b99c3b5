pub mod distributions;
pub mod point;
pub mod vec;
