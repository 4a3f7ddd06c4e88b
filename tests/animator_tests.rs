use glam::Vec3;
use bluemarble::animator::{GlobeAnimator, RPM_TO_RADS_PER_SEC};
use bluemarble::config::GlobeConfig;

#[cfg(test)]
mod animator_tests {
    use super::*;

    #[test]
    fn test_advance_zero_is_rest_pose() {
        let frame = GlobeAnimator::default().advance(0.0);

        assert_eq!(frame.rotations.stars, 0.0);
        assert_eq!(frame.rotations.surface, 0.0);
        assert_eq!(frame.rotations.clouds, 0.0);
        assert_eq!(frame.light_position, Vec3::new(0.0, -1000.0, -10000.0));
    }

    #[test]
    fn test_advance_is_deterministic() {
        let animator = GlobeAnimator::default();
        for t in [0.0, 0.016, 1.5, 59.9, 3600.0] {
            assert_eq!(animator.advance(t), animator.advance(t));
        }
    }

    #[test]
    fn test_angles_are_linear_in_time() {
        let animator = GlobeAnimator::default();
        let a = animator.advance(3.0).rotations;
        let b = animator.advance(6.0).rotations;

        assert!((b.surface - 2.0 * a.surface).abs() < 1e-5);
        assert!((b.clouds - 2.0 * a.clouds).abs() < 1e-5);
        assert!((b.stars - 2.0 * a.stars).abs() < 1e-5);
        assert!((a.surface + 0.5 * RPM_TO_RADS_PER_SEC * 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_light_stays_on_orbit() {
        let animator = GlobeAnimator::default();
        for i in 0..200 {
            let p = animator.advance(i as f32 * 0.7).light_position;
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!((horizontal - 1e4).abs() < 1.0, "radius drifted to {}", horizontal);
            assert!((p.y - p.z / 10.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_orbit_radius_from_config() {
        let config = GlobeConfig {
            orbit_radius: 500.0,
            ..Default::default()
        };
        let animator = GlobeAnimator::new(&config);
        assert_eq!(animator.orbit_radius(), 500.0);
        assert_eq!(animator.advance(0.0).light_position, Vec3::new(0.0, -50.0, -500.0));
    }
}
