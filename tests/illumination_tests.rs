use glam::{Vec3, Vec4};
use bluemarble::{diffuse_intensity, shade};

#[cfg(test)]
mod shading_tests {
    use super::*;

    const DAY: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
    const NIGHT: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

    #[test]
    fn test_light_in_front_gives_day() {
        let color = shade(Vec3::Z, Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), DAY, NIGHT);
        assert_eq!(color, DAY);
    }

    #[test]
    fn test_light_behind_gives_night() {
        let color = shade(Vec3::Z, Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), DAY, NIGHT);
        assert_eq!(color, NIGHT);
    }

    #[test]
    fn test_output_is_convex_combination() {
        let day = Vec4::new(0.8, 0.1, 0.4, 1.0);
        let night = Vec4::new(0.05, 0.3, 0.9, 1.0);

        for i in 0..64 {
            let angle = i as f32 / 64.0 * std::f32::consts::TAU;
            let light = Vec3::new(angle.cos(), angle.sin() * 0.5, angle.sin()) * 50.0;
            let color = shade(Vec3::Z, Vec3::new(0.0, 0.0, 1.0), light, day, night);

            for c in 0..4 {
                let lo = day[c].min(night[c]) - 1e-6;
                let hi = day[c].max(night[c]) + 1e-6;
                assert!(color[c] >= lo && color[c] <= hi, "channel {} out of range: {:?}", c, color);
            }
        }
    }

    #[test]
    fn test_intensity_is_cosine_of_incidence() {
        // Light 60 degrees off the normal
        let light = Vec3::new(60f32.to_radians().sin(), 0.0, 60f32.to_radians().cos()) * 1e4;
        let intensity = diffuse_intensity(Vec3::Z, Vec3::ZERO, light);
        assert!((intensity - 0.5).abs() < 1e-4, "got {}", intensity);
    }

    #[test]
    fn test_intensity_never_exceeds_one_for_unnormalized_normal() {
        let intensity = diffuse_intensity(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(intensity, 1.0);
    }

    #[test]
    fn test_far_light_gives_same_result_as_direction() {
        let near = diffuse_intensity(Vec3::Y, Vec3::new(0.0, 7.0, 0.0), Vec3::new(0.0, 1e4, 1e4));
        assert!((near - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-3);
    }
}
