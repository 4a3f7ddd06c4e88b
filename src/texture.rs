//! RGBA textures with wrapping, repeat scaling and bilinear sampling.
//!
//! Decoding is delegated to the `image` crate. Texture coordinates follow the
//! GL convention: `v = 0` is the bottom row of the image.

use std::path::Path;

use anyhow::{Context, Result};
use glam::{Vec2, Vec4};

/// How coordinates outside `[0, 1]` are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    #[default]
    ClampToEdge,
    Repeat,
}

#[derive(Debug, Clone)]
pub struct Texture {
    width: u32,
    height: u32,
    /// RGBA8 texels, top row first
    texels: Vec<[u8; 4]>,
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    /// Multiplier applied to incoming coordinates before wrapping
    pub repeat: Vec2,
}

impl Texture {
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Self {
        assert_eq!(
            bytes.len(),
            (width * height * 4) as usize,
            "texel buffer does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            texels: bytemuck::cast_slice(bytes).to_vec(),
            wrap_s: Wrap::default(),
            wrap_t: Wrap::default(),
            repeat: Vec2::ONE,
        }
    }

    /// Single-texel texture of one colour
    pub fn solid(color: [u8; 4]) -> Self {
        Self::from_rgba8(1, 1, &color)
    }

    /// Build a texture from a generator called with the centre UV of each texel
    pub fn generate(width: u32, height: u32, texel: impl Fn(Vec2) -> [u8; 4]) -> Self {
        let mut bytes = Vec::with_capacity((width * height * 4) as usize);
        for row in 0..height {
            for col in 0..width {
                let uv = Vec2::new(
                    (col as f32 + 0.5) / width as f32,
                    1.0 - (row as f32 + 0.5) / height as f32,
                );
                bytes.extend_from_slice(&texel(uv));
            }
        }
        Self::from_rgba8(width, height, &bytes)
    }

    /// Decode an image file into a texture
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Failed to decode texture {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        log::debug!("Loaded texture {} ({}x{})", path.display(), width, height);
        Ok(Self::from_rgba8(width, height, image.as_raw()))
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap_s = wrap;
        self.wrap_t = wrap;
        self
    }

    pub fn with_repeat(mut self, repeat: Vec2) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Texel at integer coordinates, rows counted from the bottom
    fn texel(&self, x: i64, y: i64) -> Vec4 {
        let x = Self::wrap_index(x, self.width, self.wrap_s);
        let y = Self::wrap_index(y, self.height, self.wrap_t);
        let row = self.height as usize - 1 - y;
        let [r, g, b, a] = self.texels[row * self.width as usize + x];
        Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
    }

    fn wrap_index(i: i64, size: u32, wrap: Wrap) -> usize {
        let size = size as i64;
        match wrap {
            Wrap::Repeat => i.rem_euclid(size) as usize,
            Wrap::ClampToEdge => i.clamp(0, size - 1) as usize,
        }
    }

    /// Bilinear sample at texture coordinates `uv`
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let uv = uv * self.repeat;
        let x = uv.x * self.width as f32 - 0.5;
        let y = uv.y * self.height as f32 - 0.5;

        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let bottom = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), fx);
        let top = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), fx);
        bottom.lerp(top, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Texture {
        // top row: red, green; bottom row: blue, white
        let bytes = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        Texture::from_rgba8(2, 2, &bytes)
    }

    #[test]
    fn texel_centres_sample_exactly() {
        let tex = two_by_two();
        assert_eq!(tex.sample(Vec2::new(0.25, 0.75)), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(tex.sample(Vec2::new(0.25, 0.25)), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(tex.sample(Vec2::new(0.75, 0.25)), Vec4::ONE);
    }

    #[test]
    fn clamp_holds_edge_texel() {
        let tex = two_by_two();
        assert_eq!(tex.sample(Vec2::new(-3.0, 0.75)), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn repeat_wraps_coordinates() {
        let tex = two_by_two().with_wrap(Wrap::Repeat);
        assert_eq!(tex.sample(Vec2::new(1.25, 0.75)), tex.sample(Vec2::new(0.25, 0.75)));
        assert_eq!(tex.sample(Vec2::new(-0.75, -0.25)), tex.sample(Vec2::new(0.25, 0.75)));
    }

    #[test]
    fn repeat_scale_tiles_texture() {
        let tex = two_by_two().with_wrap(Wrap::Repeat).with_repeat(Vec2::new(2.0, 2.0));
        assert_eq!(tex.sample(Vec2::new(0.125, 0.375)), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn solid_texture_is_uniform() {
        let tex = Texture::solid([10, 20, 30, 255]);
        let expected = Vec4::new(10.0, 20.0, 30.0, 255.0) / 255.0;
        assert!((tex.sample(Vec2::new(0.3, 0.9)) - expected).length() < 1e-6);
    }

    #[test]
    fn generate_passes_texel_centres() {
        let tex = Texture::generate(2, 1, |uv| if uv.x < 0.5 { [0, 0, 0, 255] } else { [255, 255, 255, 255] });
        assert_eq!(tex.sample(Vec2::new(0.75, 0.5)), Vec4::ONE);
        assert_eq!(tex.dimensions(), (2, 1));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Texture::load(Path::new("does/not/exist.jpg")).is_err());
    }
}
