pub mod animator;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod display;
pub mod frame;
pub mod illumination;
pub mod materials;
pub mod math;
pub mod scenes;
pub mod texture;

pub use animator::{GlobeAnimator, GlobeFrame, Rotations};
pub use illumination::{diffuse_intensity, shade};
