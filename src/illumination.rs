//! Day/night illumination model for the globe surface.
//!
//! The surface is lit by a single diffuse (Lambertian) term, but instead of
//! scaling a base colour the term blends two texture samples: the night-side
//! imagery where the surface faces away from the light and the day-side
//! imagery where it faces the light.

use glam::{Vec3, Vec4};

/// Lambertian intensity of a surface sample lit from `light_position`.
///
/// `normal`, `position` and `light_position` must share a reference frame.
/// The result is clamped to `[0, 1]`: zero when the surface is edge-on or
/// faces away from the light, one when it faces the light head-on.
pub fn diffuse_intensity(normal: Vec3, position: Vec3, light_position: Vec3) -> f32 {
    let light_direction = (position - light_position).normalize_or_zero();
    (-light_direction).dot(normal).clamp(0.0, 1.0)
}

/// Blend the night and day samples by the diffuse intensity at this sample.
///
/// The output is always a convex combination of the two inputs.
pub fn shade(
    normal: Vec3,
    position: Vec3,
    light_position: Vec3,
    day_color: Vec4,
    night_color: Vec4,
) -> Vec4 {
    let intensity = diffuse_intensity(normal, position, light_position);
    night_color.lerp(day_color, intensity)
}
