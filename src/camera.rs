use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::math::Ray;

/// Perspective camera looking down its local -z axis
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(position: Vec3, fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            fov_deg,
            aspect,
            near,
            far,
        }
    }

    /// Update the aspect ratio after a resize; zero-sized viewports are ignored
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// World-to-view transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// World-space ray through the centre of pixel (x, y), y growing downwards
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let ndc = Vec2::new(
            (x as f32 + 0.5) / width as f32 * 2.0 - 1.0,
            1.0 - (y as f32 + 0.5) / height as f32 * 2.0,
        );
        let half_height = (self.fov_deg.to_radians() * 0.5).tan();
        let view_dir = Vec3::new(ndc.x * half_height * self.aspect, ndc.y * half_height, -1.0);
        // The view rotation is orthonormal, so its transpose maps back to world space
        let to_world = Mat3::from_mat4(self.view_matrix()).transpose();
        Ray::new(self.position, to_world * view_dir)
    }

    /// Project a world point to pixel coordinates, or `None` behind the camera
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<Vec2> {
        let view = self.view_matrix().transform_point3(point);
        if view.z >= -self.near {
            return None;
        }
        let ndc = self.projection_matrix().project_point3(view);
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width as f32,
            (1.0 - ndc.y) * 0.5 * height as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 20.0), 50.0, 4.0 / 3.0, 5.0, 11000.0)
    }

    #[test]
    fn centre_ray_looks_down_negative_z() {
        let ray = camera().ray_for_pixel(400, 300, 801, 601);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn top_row_rays_point_up() {
        let ray = camera().ray_for_pixel(400, 0, 800, 600);
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn view_matrix_moves_camera_to_origin() {
        let view = camera().view_matrix().transform_point3(Vec3::new(0.0, 0.0, 20.0));
        assert!(view.length() < 1e-5);
    }

    #[test]
    fn project_origin_lands_in_centre() {
        let p = camera().project(Vec3::ZERO, 800, 600).unwrap();
        assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn project_behind_camera_is_none() {
        assert!(camera().project(Vec3::new(0.0, 0.0, 30.0), 800, 600).is_none());
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = camera();
        cam.set_viewport(1000, 500);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(0, 500);
        assert_eq!(cam.aspect, 2.0);
    }
}
