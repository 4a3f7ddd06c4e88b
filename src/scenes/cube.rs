//! Lambert-shaded cube spinning in front of the camera.
//!
//! Two variants share the geometry: the layout demo adds an ambient term and
//! spins a little slower about y; the snapshot demo has no ambient light and
//! can write the current frame to disk.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::camera::Camera;
use crate::config::CubeConfig;
use crate::core::DisplayContext;
use crate::materials::{DirectionalLight, LambertMaterial};
use crate::math::{hex_to_rgb, Ray, AABB};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeVariant {
    Layout,
    Snapshot,
}

/// Rotation of the cube and whether it is currently spinning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeState {
    /// Euler angles (x, y, z) in radians, applied in XYZ order
    pub rotation: Vec3,
    pub motion_enabled: bool,
}

impl Default for CubeState {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            motion_enabled: true,
        }
    }
}

impl CubeState {
    /// Advance one displayed frame; a paused cube keeps its orientation
    pub fn step(self, spin: Vec2) -> Self {
        if !self.motion_enabled {
            return self;
        }
        Self {
            rotation: self.rotation + spin.extend(0.0),
            ..self
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            motion_enabled: !self.motion_enabled,
            ..self
        }
    }
}

pub struct CubeScene {
    variant: CubeVariant,
    camera: Camera,
    cube: AABB,
    center: Vec3,
    material: LambertMaterial,
    ambient: Vec3,
    light: DirectionalLight,
    spin: Vec2,
}

impl CubeScene {
    pub fn new(config: &CubeConfig, variant: CubeVariant) -> Self {
        let (ambient, spin) = match variant {
            CubeVariant::Layout => (hex_to_rgb(config.ambient), config.layout_spin),
            CubeVariant::Snapshot => (Vec3::ZERO, config.snapshot_spin),
        };

        Self {
            variant,
            camera: Camera::new(Vec3::ZERO, config.fov_deg, 1.0, config.near, config.far),
            cube: AABB::cube(config.size),
            center: Vec3::new(0.0, 0.0, -config.distance),
            material: LambertMaterial::from_hex(config.color),
            ambient,
            light: DirectionalLight::new(Vec3::from_array(config.light_direction), Vec3::ONE),
            spin: Vec2::from_array(spin),
        }
    }

    pub fn variant(&self) -> CubeVariant {
        self.variant
    }

    /// Per-frame rotation increment for this variant
    pub fn spin(&self) -> Vec2 {
        self.spin
    }

    fn model_matrix(&self, state: &CubeState) -> Mat4 {
        let r = state.rotation;
        Mat4::from_rotation_translation(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z), self.center)
    }

    /// Colour seen along a world-space ray; transparent where it misses the cube
    pub fn shade_ray(&self, state: &CubeState, ray: &Ray) -> Vec4 {
        let model = self.model_matrix(state);
        let local = ray.transformed(&model.inverse());

        match self.cube.intersect(&local) {
            Some(t) if t > 0.0 => {
                let normal = model.transform_vector3(self.cube.normal_at(local.at(t)));
                self.material
                    .shade(normal, self.ambient, std::slice::from_ref(&self.light))
                    .extend(1.0)
            }
            _ => Vec4::ZERO,
        }
    }

    pub fn render_colors(&self, state: &CubeState, context: &DisplayContext) -> Vec<Vec4> {
        let mut camera = self.camera.clone();
        camera.set_viewport(context.width, context.height);

        let mut colors = Vec::with_capacity(context.pixel_count());
        for y in 0..context.height {
            for x in 0..context.width {
                let ray = camera.ray_for_pixel(x, y, context.width, context.height);
                colors.push(self.shade_ray(state, &ray));
            }
        }
        colors
    }
}
