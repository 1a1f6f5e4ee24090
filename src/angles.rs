use glam::Vec2;

/// Unit vector pointing along a heading given in degrees.
pub fn heading_vec(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Smallest signed difference `to - from` between two headings, in degrees.
/// Result is in `(-180, 180]`.
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Interpolate between two headings along the shortest arc.
/// Headings are unbounded degrees; the result is not renormalized.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + delta_angle(from, to) * t
}

/// Linear interpolation between two scalars.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn heading_vec_cardinals() {
        let east = heading_vec(0.0);
        assert_abs_diff_eq!(east.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(east.y, 0.0, epsilon = 1e-6);

        let north = heading_vec(90.0);
        assert_abs_diff_eq!(north.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(north.y, 1.0, epsilon = 1e-6);

        let west = heading_vec(180.0);
        assert_abs_diff_eq!(west.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(west.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn heading_vec_is_unit_length() {
        for deg in [-720.0, -33.3, 0.0, 45.0, 359.0, 1234.5] {
            assert_abs_diff_eq!(heading_vec(deg).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn delta_angle_takes_shortest_path() {
        assert_abs_diff_eq!(delta_angle(350.0, 10.0), 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(delta_angle(10.0, 350.0), -20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(delta_angle(0.0, 190.0), -170.0, epsilon = 1e-4);
        assert_abs_diff_eq!(delta_angle(0.0, 180.0), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(delta_angle(45.0, 45.0), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn delta_angle_handles_unbounded_headings() {
        // Headings drift past 360 over time; deltas must still be short.
        assert_abs_diff_eq!(delta_angle(725.0, 10.0), 5.0, epsilon = 1e-3);
        assert_abs_diff_eq!(delta_angle(-350.0, 20.0), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn lerp_angle_crosses_the_wrap() {
        // 350 -> 10 goes through 360, not backwards through 180.
        assert_abs_diff_eq!(lerp_angle(350.0, 10.0, 0.5), 360.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lerp_angle(0.0, 90.0, 0.2), 18.0, epsilon = 1e-4);
    }

    #[test]
    fn scalar_lerp() {
        assert_abs_diff_eq!(lerp(0.0, 10.0, 0.25), 2.5, epsilon = 1e-6);
        assert_abs_diff_eq!(lerp(5.0, 5.0, 0.9), 5.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lerp(2.0, 0.0, 1.0), 0.0, epsilon = 1e-6);
    }
}
