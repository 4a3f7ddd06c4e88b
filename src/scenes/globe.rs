//! Rotating globe lit by an orbiting sun.
//!
//! The scene holds three bodies, all centred on the world origin:
//! a star shell seen from the inside, the planet surface (tilted about z and
//! spinning about its own y axis) and a slightly larger cloud shell parented
//! to the surface. Each pixel is ray cast against the bodies; surface pixels
//! go through the day/night [`shade`] blend.

use std::path::Path;

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use super::common::{procedural_clouds, procedural_day, procedural_night, procedural_stars};
use crate::animator::{GlobeAnimator, GlobeFrame};
use crate::camera::Camera;
use crate::config::GlobeConfig;
use crate::core::sphere::Sphere;
use crate::core::DisplayContext;
use crate::illumination::shade;
use crate::materials::{blend_over, PhongMaterial, PointLight};
use crate::math::{hex_to_rgb, Ray};
use crate::texture::{Texture, Wrap};

/// Star texture tiling around the shell, so the stars keep their aspect ratio
const STARS_REPEAT: Vec2 = Vec2::new(4.0 * std::f32::consts::PI, 4.0);

pub struct GlobeTextures {
    pub day: Texture,
    pub night: Texture,
    /// Grayscale coverage map for the cloud shell
    pub clouds: Texture,
    pub stars: Texture,
}

impl GlobeTextures {
    pub const DAY_FILE: &'static str = "land_shallow_topo_2048.jpg";
    pub const NIGHT_FILE: &'static str = "land_ocean_ice_lights_2048.jpg";
    pub const CLOUDS_FILE: &'static str = "cloud_combined_2048.jpg";
    pub const STARS_FILE: &'static str = "stars512.jpg";

    pub fn procedural() -> Self {
        Self {
            day: procedural_day(),
            night: procedural_night(),
            clouds: procedural_clouds(),
            stars: procedural_stars(),
        }
    }

    /// Load the textures from `dir`; anything missing or unreadable is replaced
    /// by its procedural stand-in
    pub fn load_or_fallback(dir: Option<&Path>) -> Self {
        let load = |file: &str, fallback: fn() -> Texture| -> Texture {
            let Some(dir) = dir else {
                return fallback();
            };
            match Texture::load(&dir.join(file)) {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("{:#}; using a generated texture instead", e);
                    fallback()
                }
            }
        };

        Self {
            day: load(Self::DAY_FILE, procedural_day),
            night: load(Self::NIGHT_FILE, procedural_night),
            clouds: load(Self::CLOUDS_FILE, procedural_clouds).with_wrap(Wrap::Repeat),
            stars: load(Self::STARS_FILE, procedural_stars)
                .with_wrap(Wrap::Repeat)
                .with_repeat(STARS_REPEAT),
        }
    }
}

/// A body's orientation for one frame, with the cached inverse
#[derive(Debug, Clone, Copy)]
struct Pose {
    to_world: Quat,
    to_local: Quat,
}

impl Pose {
    fn new(rotation: Quat) -> Self {
        Self {
            to_world: rotation,
            to_local: rotation.inverse(),
        }
    }

    fn local_ray(&self, ray: &Ray) -> Ray {
        Ray {
            origin: self.to_local * ray.origin,
            direction: self.to_local * ray.direction,
        }
    }
}

/// Per-frame quantities shared by every pixel
struct FrameSetup {
    camera: Camera,
    view: Mat4,
    stars: Pose,
    surface: Pose,
    clouds: Pose,
    light: PointLight,
    /// Light position in view space
    light_view: Vec3,
    /// Pixel position of the sun when it is visible
    sun_screen: Option<Vec2>,
}

pub struct GlobeScene {
    config: GlobeConfig,
    animator: GlobeAnimator,
    camera: Camera,
    textures: GlobeTextures,
    /// Fixed axial tilt of the planet group
    tilt: Quat,
    surface: Sphere,
    clouds: Sphere,
    stars: Sphere,
    cloud_material: PhongMaterial,
}

impl GlobeScene {
    pub fn new(config: &GlobeConfig, textures: GlobeTextures) -> Self {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, config.camera_distance),
            config.fov_deg,
            1.0,
            config.near,
            config.far(),
        );
        let cloud_material = PhongMaterial {
            color: hex_to_rgb(config.clouds.color),
            emissive: hex_to_rgb(config.clouds.emissive),
            specular: hex_to_rgb(config.clouds.specular),
            shininess: config.clouds.shininess,
        };

        Self {
            config: config.clone(),
            animator: GlobeAnimator::new(config),
            camera,
            textures,
            tilt: Quat::from_rotation_z(-config.axial_tilt()),
            surface: Sphere::new(config.globe_radius),
            clouds: Sphere::new(config.cloud_radius()),
            stars: Sphere::new(config.star_shell_radius()),
            cloud_material,
        }
    }

    pub fn animator(&self) -> &GlobeAnimator {
        &self.animator
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Compute the frame for elapsed time `t`
    pub fn advance(&self, t: f32) -> GlobeFrame {
        self.animator.advance(t)
    }

    fn setup(&self, frame: &GlobeFrame, context: &DisplayContext) -> FrameSetup {
        let mut camera = self.camera.clone();
        camera.set_viewport(context.width, context.height);
        let view = camera.view_matrix();

        let surface_rotation = self.tilt * Quat::from_rotation_y(frame.rotations.surface);
        let light_view = view.transform_point3(frame.light_position);
        let surface = Pose::new(surface_rotation);

        let sun_screen = if self.config.sun_glow.enabled {
            let to_sun = Ray::new(camera.position, frame.light_position - camera.position);
            let occluded = self.surface.intersect(&surface.local_ray(&to_sun)).is_some();
            if occluded {
                None
            } else {
                camera.project(frame.light_position, context.width, context.height)
            }
        } else {
            None
        };

        FrameSetup {
            view,
            stars: Pose::new(Quat::from_rotation_y(frame.rotations.stars)),
            surface,
            clouds: Pose::new(surface_rotation * Quat::from_rotation_y(frame.rotations.clouds)),
            light: PointLight {
                position: light_view,
                color: Vec3::ONE,
                intensity: self.config.light_intensity,
            },
            light_view,
            sun_screen,
            camera,
        }
    }

    /// Colour of the star shell where the ray leaves it
    fn star_color(&self, setup: &FrameSetup, ray: &Ray) -> Vec4 {
        let local = setup.stars.local_ray(ray);
        match self.stars.intersect(&local) {
            Some(hit) => {
                let uv = self.stars.uv_at(local.at(hit.far));
                self.textures.stars.sample(uv).truncate().extend(1.0)
            }
            None => Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    fn surface_color(&self, setup: &FrameSetup, ray: &Ray, t: f32) -> Vec4 {
        let world = ray.at(t);
        let local = setup.surface.to_local * world;
        let uv = self.surface.uv_at(local);

        let normal = setup.view.transform_vector3(self.surface.normal_at(world));
        let position = setup.view.transform_point3(world);
        let day = self.textures.day.sample(uv);
        let night = self.textures.night.sample(uv);

        shade(normal, position, setup.light_view, day, night).truncate().extend(1.0)
    }

    fn cloud_color(&self, setup: &FrameSetup, ray: &Ray, t: f32) -> Vec4 {
        let world = ray.at(t);
        let local = setup.clouds.to_local * world;
        let coverage = self.textures.clouds.sample(self.clouds.uv_at(local)).y;

        let normal = setup.view.transform_vector3(setup.clouds.to_world * self.clouds.normal_at(local));
        let position = setup.view.transform_point3(world);
        self.cloud_material
            .shade(normal, position, &setup.light)
            .extend(coverage)
    }

    fn sun_glow(&self, setup: &FrameSetup, pixel: Vec2, height: u32) -> f32 {
        let Some(sun) = setup.sun_screen else {
            return 0.0;
        };
        let glow = &self.config.sun_glow;
        let radius = glow.radius * height as f32;
        let falloff = (1.0 - pixel.distance(sun) / radius).max(0.0);
        glow.strength * falloff * falloff
    }

    fn shade_ray(&self, setup: &FrameSetup, ray: &Ray) -> Vec4 {
        let surface_t = self
            .surface
            .intersect(&setup.surface.local_ray(ray))
            .map(|hit| hit.near)
            .filter(|t| *t > 0.0);

        let mut color = match surface_t {
            Some(t) => self.surface_color(setup, ray, t),
            None => self.star_color(setup, ray),
        };

        // Cloud layers back to front; the far side only shows past the limb
        if let Some(hit) = self.clouds.intersect(&setup.clouds.local_ray(ray)) {
            if surface_t.is_none() {
                color = blend_over(self.cloud_color(setup, ray, hit.far), color);
            }
            if hit.near > 0.0 {
                color = blend_over(self.cloud_color(setup, ray, hit.near), color);
            }
        }

        color
    }

    /// Render the frame into linear RGBA colours, row by row from the top
    pub fn render_colors(&self, frame: &GlobeFrame, context: &DisplayContext) -> Vec<Vec4> {
        let setup = self.setup(frame, context);
        let (width, height) = (context.width, context.height);

        let mut colors = Vec::with_capacity(context.pixel_count());
        for y in 0..height {
            for x in 0..width {
                let ray = setup.camera.ray_for_pixel(x, y, width, height);
                let color = self.shade_ray(&setup, &ray);
                let glow = self.sun_glow(&setup, Vec2::new(x as f32 + 0.5, y as f32 + 0.5), height);
                colors.push((color.truncate() + Vec3::splat(glow)).min(Vec3::ONE).extend(color.w));
            }
        }
        colors
    }

    /// Colour of a single world-space ray, mostly useful for probing
    pub fn sample_ray(&self, frame: &GlobeFrame, context: &DisplayContext, ray: &Ray) -> Vec4 {
        self.shade_ray(&self.setup(frame, context), ray)
    }
}
