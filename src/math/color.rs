use glam::{Vec3, Vec4};

/// Convert a packed 0xRRGGBB colour to linear [0, 1] components
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

pub fn hex_to_rgba(hex: u32, alpha: f32) -> Vec4 {
    hex_to_rgb(hex).extend(alpha)
}

/// Quantize a [0, 1] colour to RGBA8, clamping out-of-range components
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let c = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
