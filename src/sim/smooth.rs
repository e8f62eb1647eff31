//! Frame-rate independent exponential smoothing
//!
//! Every eased value in the game (sizes, wander velocity, drag-follow) moves a
//! fraction `1 - e^(-rate * dt)` of the remaining distance per frame. The
//! fraction is clamped to [0, 1] so a step never overshoots its target.

use glam::Vec2;

/// Fraction of the remaining distance covered in one step
#[inline]
pub fn smooth_factor(rate: f32, dt: f32) -> f32 {
    (1.0 - (-rate * dt).exp()).clamp(0.0, 1.0)
}

/// Move `current` toward `target` at the given rate over `dt` seconds
#[inline]
pub fn smooth(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * smooth_factor(rate, dt)
}

/// Per-axis [`smooth`] for vectors
#[inline]
pub fn smooth_vec2(current: Vec2, target: Vec2, rate: f32, dt: f32) -> Vec2 {
    current + (target - current) * smooth_factor(rate, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_zero_dt_is_identity() {
        assert_eq!(smooth(3.0, 10.0, 8.0, 0.0), 3.0);
    }

    #[test]
    fn test_negative_dt_does_not_move_away() {
        assert_eq!(smooth(3.0, 10.0, 8.0, -1.0), 3.0);
    }

    #[test]
    fn test_huge_step_lands_on_target() {
        let v = smooth(0.0, 5.0, 8.0, 100.0);
        assert!((v - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_higher_rate_is_snappier() {
        let slow = smooth(0.0, 1.0, 2.0, DT);
        let fast = smooth(0.0, 1.0, 8.0, DT);
        assert!(fast > slow);
    }

    #[test]
    fn test_frame_rate_independence() {
        // One 1/30s step should roughly equal two 1/60s steps
        let one = smooth(0.0, 1.0, 4.0, 2.0 * DT);
        let two = smooth(smooth(0.0, 1.0, 4.0, DT), 1.0, 4.0, DT);
        assert!((one - two).abs() < 1e-5);
    }

    #[test]
    fn test_vec2_is_per_axis() {
        let v = smooth_vec2(Vec2::ZERO, Vec2::new(10.0, -10.0), 8.0, DT);
        assert!((v.x - smooth(0.0, 10.0, 8.0, DT)).abs() < 1e-6);
        assert!((v.y - smooth(0.0, -10.0, 8.0, DT)).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_never_overshoots(
            current in -1000.0f32..1000.0,
            target in -1000.0f32..1000.0,
            rate in 0.1f32..20.0,
            dt in 0.0f32..0.1,
        ) {
            let next = smooth(current, target, rate, dt);
            let (lo, hi) = if current <= target { (current, target) } else { (target, current) };
            prop_assert!(next >= lo - 1e-3 && next <= hi + 1e-3);
        }

        #[test]
        fn prop_converges(
            current in -1000.0f32..1000.0,
            target in -1000.0f32..1000.0,
            rate in 1.0f32..10.0,
        ) {
            let mut v = current;
            let mut prev_gap = (target - v).abs();
            for _ in 0..2000 {
                v = smooth(v, target, rate, DT);
                let gap = (target - v).abs();
                prop_assert!(gap <= prev_gap + 1e-3);
                prev_gap = gap;
            }
            prop_assert!((target - v).abs() < 0.01);
        }
    }
}
