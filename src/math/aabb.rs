use glam::Vec3;

use super::ray::{intersect_aabb, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Axis-aligned cube of edge `size` centred on the origin
    pub fn cube(size: f32) -> Self {
        let half = Vec3::splat(size * 0.5);
        Self::new(-half, half)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        intersect_aabb(ray.origin, ray.direction, self.min, self.max)
    }

    /// Outward normal of the face nearest to a point on the surface
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        let half = (self.max - self.min) * 0.5;
        let local = (point - self.center()) / half;
        let abs = local.abs();

        if abs.x >= abs.y && abs.x >= abs.z {
            Vec3::new(local.x.signum(), 0.0, 0.0)
        } else if abs.y >= abs.z {
            Vec3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, local.z.signum())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_cube() {
        let aabb = AABB::cube(10.0);
        assert_eq!(aabb.min, Vec3::splat(-5.0));
        assert_eq!(aabb.max, Vec3::splat(5.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
    }

    #[test]
    fn test_aabb_normal_on_each_face() {
        let aabb = AABB::cube(2.0);
        assert_eq!(aabb.normal_at(Vec3::new(1.0, 0.2, -0.3)), Vec3::X);
        assert_eq!(aabb.normal_at(Vec3::new(0.1, -1.0, 0.5)), Vec3::NEG_Y);
        assert_eq!(aabb.normal_at(Vec3::new(0.4, 0.4, 1.0)), Vec3::Z);
    }

    #[test]
    fn test_aabb_intersect_front_face() {
        let aabb = AABB::cube(10.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z);
        let t = aabb.intersect(&ray).unwrap();
        assert!((t - 15.0).abs() < 1e-4);
        assert_eq!(aabb.normal_at(ray.at(t)), Vec3::Z);
    }
}
