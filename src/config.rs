// config.rs - Demo configuration with JSON overrides
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Rotation rates, light orbit and globe layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Star shell revolutions per 60 seconds
    pub stars_rpm: f32,
    /// Planet surface revolutions per 60 seconds
    pub surface_rpm: f32,
    /// Cloud shell revolutions per 60 seconds, relative to the surface
    pub cloud_rpm: f32,
    /// Light orbit revolutions per 60 seconds
    pub light_rpm: f32,
    /// Light orbit radius, large enough that the light acts as a directional source
    pub orbit_radius: f32,
    /// Axial tilt in degrees, applied once at scene construction
    pub axial_tilt_deg: f32,
    pub globe_radius: f32,
    /// Cloud shell radius as a multiple of the globe radius
    pub cloud_scale: f32,
    pub camera_distance: f32,
    pub fov_deg: f32,
    pub near: f32,
    /// Point light intensity feeding the cloud material
    pub light_intensity: f32,
    pub clouds: CloudMaterialConfig,
    pub sun_glow: SunGlowConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            stars_rpm: 0.25,
            surface_rpm: 0.5,
            cloud_rpm: 0.2,
            light_rpm: 0.25,
            orbit_radius: 1e4,
            axial_tilt_deg: 23.5,
            globe_radius: 7.0,
            cloud_scale: 1.005,
            camera_distance: 20.0,
            fov_deg: 50.0,
            near: 5.0,
            light_intensity: 5.0,
            clouds: CloudMaterialConfig::default(),
            sun_glow: SunGlowConfig::default(),
        }
    }
}

impl GlobeConfig {
    /// Far plane sits just beyond the star shell
    pub fn far(&self) -> f32 {
        self.star_shell_radius()
    }

    pub fn star_shell_radius(&self) -> f32 {
        self.orbit_radius * 1.1
    }

    pub fn cloud_radius(&self) -> f32 {
        self.globe_radius * self.cloud_scale
    }

    pub fn axial_tilt(&self) -> f32 {
        self.axial_tilt_deg.to_radians()
    }

    fn validate(&self) -> Result<()> {
        let rates = [self.stars_rpm, self.surface_rpm, self.cloud_rpm, self.light_rpm, self.axial_tilt_deg];
        if rates.iter().any(|r| !r.is_finite()) {
            bail!("globe rates and tilt must be finite");
        }
        for (name, value) in [
            ("orbit_radius", self.orbit_radius),
            ("globe_radius", self.globe_radius),
            ("cloud_scale", self.cloud_scale),
            ("camera_distance", self.camera_distance),
            ("near", self.near),
        ] {
            if !(value.is_finite() && value > 0.0) {
                bail!("globe.{} must be a positive number, got {}", name, value);
            }
        }
        if self.camera_distance <= self.cloud_radius() {
            bail!(
                "globe.camera_distance ({}) must place the camera outside the cloud shell ({})",
                self.camera_distance,
                self.cloud_radius()
            );
        }
        validate_fov(self.fov_deg)
    }
}

/// Artistic constants for the cloud shell; they carry no computed behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudMaterialConfig {
    /// Faint self-illumination so clouds stay visible on the night side
    pub emissive: u32,
    /// Specular tint giving the orange rim at dawn
    pub specular: u32,
    pub shininess: f32,
    pub color: u32,
}

impl Default for CloudMaterialConfig {
    fn default() -> Self {
        Self {
            emissive: 0x181818,
            specular: 0xFF8800,
            shininess: 5.0,
            color: 0xFFFFFF,
        }
    }
}

/// Additive glow drawn around the projected light position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunGlowConfig {
    pub enabled: bool,
    /// Glow radius as a fraction of the viewport height
    pub radius: f32,
    pub strength: f32,
}

impl Default for SunGlowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 0.25,
            strength: 0.9,
        }
    }
}

/// Rotating cube layout shared by the layout and snapshot demos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubeConfig {
    pub size: f32,
    /// Distance of the cube in front of the camera
    pub distance: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub color: u32,
    pub ambient: u32,
    /// Light direction, normalized when the scene is built
    pub light_direction: [f32; 3],
    /// Rotation increments applied per displayed frame, in radians
    pub layout_spin: [f32; 2],
    pub snapshot_spin: [f32; 2],
    /// Clear colour of the snapshot demo, which replaces `display.background`
    pub snapshot_background: u32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 10.0,
            distance: 20.0,
            fov_deg: 70.0,
            near: 1.0,
            far: 1000.0,
            color: 0x9999FF,
            ambient: 0x555555,
            light_direction: [0.0, 1.0, 1.0],
            layout_spin: [0.040, 0.025],
            snapshot_spin: [0.04, 0.02],
            snapshot_background: 0xFFFFFF,
        }
    }
}

impl CubeConfig {
    fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            bail!("cube.size must be a positive number, got {}", self.size);
        }
        if !(self.near > 0.0 && self.far > self.near) {
            bail!("cube clip planes must satisfy 0 < near < far");
        }
        if self.distance - self.size <= self.near {
            bail!("cube.distance ({}) puts the cube inside the near plane", self.distance);
        }
        if self.light_direction.iter().all(|c| *c == 0.0) {
            bail!("cube.light_direction must be non-zero");
        }
        validate_fov(self.fov_deg)
    }
}

/// Window and background settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    /// Colour behind transparent scene pixels
    pub background: u32,
    /// Rate at which scene layers re-render, in frames per second
    pub target_fps: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: 0x000000,
            target_fps: 60.0,
        }
    }
}

/// Top-level configuration, every section optional in the JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub globe: GlobeConfig,
    pub cube: CubeConfig,
    pub display: DisplayConfig,
}

impl DemoConfig {
    /// Load a JSON config file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.globe.validate()?;
        self.cube.validate()?;
        if self.display.width == 0 || self.display.height == 0 {
            bail!("display dimensions must be non-zero");
        }
        if !(self.display.target_fps > 0.0) {
            bail!("display.target_fps must be positive");
        }
        Ok(())
    }
}

fn validate_fov(fov_deg: f32) -> Result<()> {
    if !(fov_deg > 0.0 && fov_deg < 180.0) {
        bail!("field of view must lie in (0, 180) degrees, got {}", fov_deg);
    }
    Ok(())
}
