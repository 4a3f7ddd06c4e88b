mod common;
mod cube;
mod globe;

pub use common::{hash2, procedural_clouds, procedural_day, procedural_night, procedural_stars};
pub use cube::{CubeScene, CubeState, CubeVariant};
pub use globe::{GlobeScene, GlobeTextures};
