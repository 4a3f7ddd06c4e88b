use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::math::Ray;

/// Entry and exit distances of a ray through a sphere.
/// `near` is negative when the ray starts inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereHit {
    pub near: f32,
    pub far: f32,
}

/// Sphere centred on the origin of its own local space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
}

impl Sphere {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Ray-sphere intersection in the sphere's local space
    pub fn intersect(&self, ray: &Ray) -> Option<SphereHit> {
        let oc = ray.origin;
        let a = ray.direction.dot(ray.direction);
        let half_b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let far = (-half_b + sqrt_d) / a;
        if far < 1e-4 {
            return None;
        }

        Some(SphereHit {
            near: (-half_b - sqrt_d) / a,
            far,
        })
    }

    /// Get normal at point on sphere surface
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        point.normalize()
    }

    /// Texture coordinates for a point on the sphere.
    ///
    /// `u` runs around the equator starting at -x, `v` runs from the south
    /// pole (0) to the north pole (1).
    pub fn uv_at(&self, point: Vec3) -> Vec2 {
        let n = self.normal_at(point);
        let theta = n.y.clamp(-1.0, 1.0).acos();
        let phi = n.z.atan2(-n.x).rem_euclid(TAU);
        Vec2::new(phi / TAU, 1.0 - theta / PI)
    }
}
