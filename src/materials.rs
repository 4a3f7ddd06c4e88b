//! Surface materials for the star shell, cloud shell and cube.

use glam::{Vec3, Vec4};

use crate::math::hex_to_rgb;

/// Light at infinity shining along `-direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector pointing from the scene towards the light
    pub direction: Vec3,
    pub color: Vec3,
}

impl DirectionalLight {
    pub fn new(toward_light: Vec3, color: Vec3) -> Self {
        Self {
            direction: toward_light.normalize(),
            color,
        }
    }
}

/// Point light without distance falloff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}

/// Matte diffuse material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertMaterial {
    pub color: Vec3,
}

impl LambertMaterial {
    pub fn from_hex(hex: u32) -> Self {
        Self { color: hex_to_rgb(hex) }
    }

    pub fn shade(&self, normal: Vec3, ambient: Vec3, lights: &[DirectionalLight]) -> Vec3 {
        let irradiance = lights.iter().fold(ambient, |acc, light| {
            acc + light.color * normal.dot(light.direction).max(0.0)
        });
        (self.color * irradiance).min(Vec3::ONE)
    }
}

/// Blinn-Phong material with self-illumination, used for the cloud shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub color: Vec3,
    pub emissive: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl PhongMaterial {
    /// Shade a view-space sample. The camera sits at the view-space origin.
    /// Back faces are lit as if their normal faced the viewer.
    pub fn shade(&self, normal: Vec3, position: Vec3, light: &PointLight) -> Vec3 {
        let view_dir = (-position).normalize_or_zero();
        let normal = if normal.dot(view_dir) < 0.0 { -normal } else { normal };
        let light_dir = (light.position - position).normalize_or_zero();

        let n_dot_l = normal.dot(light_dir).max(0.0);
        let radiance = light.radiance();
        let diffuse = self.color * radiance * n_dot_l;

        let specular = if n_dot_l > 0.0 {
            let half = (light_dir + view_dir).normalize_or_zero();
            let n_dot_h = normal.dot(half).max(0.0);
            self.specular * radiance * n_dot_h.powf(self.shininess) * n_dot_l
        } else {
            Vec3::ZERO
        };

        (self.emissive + diffuse + specular).min(Vec3::ONE)
    }
}

/// Source-over blend of `src` onto `dst`, using `src.w` as coverage
pub fn blend_over(src: Vec4, dst: Vec4) -> Vec4 {
    let alpha = src.w + dst.w * (1.0 - src.w);
    if alpha <= 0.0 {
        return Vec4::ZERO;
    }
    let rgb = (src.truncate() * src.w + dst.truncate() * dst.w * (1.0 - src.w)) / alpha;
    rgb.extend(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambert_unlit_side_keeps_ambient() {
        let material = LambertMaterial { color: Vec3::ONE };
        let light = DirectionalLight::new(Vec3::Y, Vec3::ONE);
        let out = material.shade(Vec3::NEG_Y, Vec3::splat(0.25), &[light]);
        assert_eq!(out, Vec3::splat(0.25));
    }

    #[test]
    fn lambert_facing_light_is_full_color() {
        let material = LambertMaterial::from_hex(0x9999FF);
        let light = DirectionalLight::new(Vec3::Y, Vec3::ONE);
        let out = material.shade(Vec3::Y, Vec3::ZERO, &[light]);
        assert!((out - hex_to_rgb(0x9999FF)).length() < 1e-6);
    }

    #[test]
    fn phong_dark_side_shows_only_emissive() {
        let material = PhongMaterial {
            color: Vec3::ONE,
            emissive: Vec3::splat(0.1),
            specular: Vec3::ONE,
            shininess: 5.0,
        };
        let light = PointLight { position: Vec3::new(0.0, 0.0, -100.0), color: Vec3::ONE, intensity: 1.0 };
        // Sample faces the camera at the origin, light is behind it
        let out = material.shade(Vec3::Z, Vec3::new(0.0, 0.0, -10.0), &light);
        assert!((out - Vec3::splat(0.1)).length() < 1e-6);
    }

    #[test]
    fn phong_lit_side_saturates() {
        let material = PhongMaterial {
            color: Vec3::ONE,
            emissive: Vec3::ZERO,
            specular: Vec3::ZERO,
            shininess: 5.0,
        };
        let light = PointLight { position: Vec3::new(0.0, 0.0, 100.0), color: Vec3::ONE, intensity: 5.0 };
        let out = material.shade(Vec3::Z, Vec3::new(0.0, 0.0, -10.0), &light);
        assert_eq!(out, Vec3::ONE);
    }

    #[test]
    fn blend_over_opaque_and_transparent() {
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(blend_over(red, blue), red);
        assert_eq!(blend_over(Vec4::ZERO, blue), blue);

        let half = blend_over(Vec4::new(1.0, 0.0, 0.0, 0.5), blue);
        assert!((half - Vec4::new(0.5, 0.0, 0.5, 1.0)).length() < 1e-6);
        assert_eq!(blend_over(Vec4::ZERO, Vec4::ZERO), Vec4::ZERO);
    }
}
