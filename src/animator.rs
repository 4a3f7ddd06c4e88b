//! Time-driven animation for the globe scene.
//!
//! Every orientation and the light position are pure functions of elapsed
//! time, so a frame can be recomputed for any timestamp without carrying
//! state between frames.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::config::GlobeConfig;

/// Converts revolutions per 60 seconds into radians per second
pub const RPM_TO_RADS_PER_SEC: f32 = TAU / 60.0;

/// Rotation angles about the y axis, in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotations {
    pub stars: f32,
    pub surface: f32,
    /// Relative to the surface, since the cloud shell is parented to it
    pub clouds: f32,
}

/// Everything the renderer needs to draw one globe frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeFrame {
    pub time: f32,
    pub rotations: Rotations,
    pub light_position: Vec3,
}

/// Immutable angular rates and orbit radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeAnimator {
    stars_rpm: f32,
    surface_rpm: f32,
    cloud_rpm: f32,
    light_rpm: f32,
    orbit_radius: f32,
}

impl GlobeAnimator {
    pub fn new(config: &GlobeConfig) -> Self {
        Self {
            stars_rpm: config.stars_rpm,
            surface_rpm: config.surface_rpm,
            cloud_rpm: config.cloud_rpm,
            light_rpm: config.light_rpm,
            orbit_radius: config.orbit_radius,
        }
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Compute the frame for elapsed time `t` seconds
    pub fn advance(&self, t: f32) -> GlobeFrame {
        let spin = |rpm: f32| -rpm * RPM_TO_RADS_PER_SEC * t;

        GlobeFrame {
            time: t,
            rotations: Rotations {
                stars: spin(self.stars_rpm),
                surface: spin(self.surface_rpm),
                clouds: spin(self.cloud_rpm),
            },
            light_position: self.light_position(t),
        }
    }

    fn light_position(&self, t: f32) -> Vec3 {
        let phase = self.light_rpm * RPM_TO_RADS_PER_SEC * t;
        let r = self.orbit_radius;
        Vec3::new(phase.sin() * r, -phase.cos() * r / 10.0, -phase.cos() * r)
    }
}

impl Default for GlobeAnimator {
    fn default() -> Self {
        Self::new(&GlobeConfig::default())
    }
}
