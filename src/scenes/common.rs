use glam::{Vec2, Vec4};
use std::f32::consts::{PI, TAU};

use crate::math::to_rgba8;
use crate::texture::{Texture, Wrap};

/// Deterministic integer hash mapped to [0, 1)
pub fn hash2(x: u32, y: u32, seed: u32) -> f32 {
    let mut h = seed.wrapping_add(x).wrapping_mul(374_761_393);
    h = h.wrapping_add(y).wrapping_mul(668_265_263);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    (h & 0xFFFF) as f32 / 65_536.0
}

/// Coarse land mask built from a few low-frequency waves
fn land(uv: Vec2) -> bool {
    let lon = uv.x * TAU;
    let lat = (uv.y - 0.5) * PI;
    let field = (lon * 2.0).sin() * (lat * 3.0).cos() + 0.6 * (lon * 5.0 + 1.3).sin() * (lat * 2.0).sin();
    field > 0.35
}

fn polar(uv: Vec2) -> bool {
    uv.y < 0.07 || uv.y > 0.93
}

pub fn procedural_day() -> Texture {
    Texture::generate(256, 128, |uv| {
        let color = if polar(uv) {
            Vec4::new(0.92, 0.94, 0.97, 1.0)
        } else if land(uv) {
            Vec4::new(0.25, 0.45, 0.18, 1.0)
        } else {
            Vec4::new(0.05, 0.18, 0.42, 1.0)
        };
        to_rgba8(color)
    })
}

/// Dark globe with scattered city lights on land
pub fn procedural_night() -> Texture {
    Texture::generate(256, 128, |uv| {
        let x = (uv.x * 256.0) as u32;
        let y = (uv.y * 128.0) as u32;
        let lit = land(uv) && !polar(uv) && hash2(x, y, 7) > 0.85;
        if lit {
            to_rgba8(Vec4::new(1.0, 0.85, 0.5, 1.0))
        } else {
            to_rgba8(Vec4::new(0.01, 0.01, 0.03, 1.0))
        }
    })
}

/// Grayscale cloud bands; the brightness doubles as coverage
pub fn procedural_clouds() -> Texture {
    Texture::generate(256, 128, |uv| {
        let band = (uv.y * PI * 9.0 + (uv.x * TAU * 2.0).sin() * 2.0).sin().max(0.0);
        let v = band.powi(4);
        to_rgba8(Vec4::new(v, v, v, 1.0))
    })
    .with_wrap(Wrap::Repeat)
}

pub fn procedural_stars() -> Texture {
    Texture::generate(128, 128, |uv| {
        let x = (uv.x * 128.0) as u32;
        let y = (uv.y * 128.0) as u32;
        let v = if hash2(x, y, 31) > 0.985 { hash2(y, x, 5) * 0.6 + 0.4 } else { 0.0 };
        to_rgba8(Vec4::new(v, v, v, 1.0))
    })
    .with_wrap(Wrap::Repeat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_bounded() {
        for i in 0..100 {
            let h = hash2(i, i * 3, 11);
            assert_eq!(h, hash2(i, i * 3, 11));
            assert!((0.0..1.0).contains(&h));
        }
    }

    #[test]
    fn procedural_textures_have_expected_wrapping() {
        assert_eq!(procedural_stars().wrap_s, Wrap::Repeat);
        assert_eq!(procedural_clouds().wrap_t, Wrap::Repeat);
        assert_eq!(procedural_day().wrap_s, Wrap::ClampToEdge);
    }

    #[test]
    fn night_is_darker_than_day_on_average() {
        let (day, night) = (procedural_day(), procedural_night());
        let mean = |t: &Texture| {
            (0..64)
                .map(|i| t.sample(Vec2::new(i as f32 / 64.0, 0.5)).truncate().length())
                .sum::<f32>()
        };
        assert!(mean(&day) > mean(&night));
    }
}
