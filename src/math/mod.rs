mod aabb;
mod color;
mod ray;

pub use aabb::AABB;
pub use color::{hex_to_rgb, hex_to_rgba, to_rgba8};
pub use ray::{intersect_aabb, Ray};
