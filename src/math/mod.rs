//! Numeric helpers shared by the mesh engine

pub mod mapping;

use nalgebra::Vector2;

pub use mapping::{natural_coordinates, shape_functions, NATURAL_INITIAL_GUESS};

/// Tolerance for coordinate comparisons (four decimal places)
///
/// Every "same position" or "last station" comparison in the engine goes
/// through this value.
pub const COORD_TOLERANCE: f64 = 1e-4;

/// Evenly spaced values over `[start, end]`, endpoints included
///
/// The last value is `end` exactly, so callers may compare it bitwise.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num - 1).map(|i| start + step * i as f64).collect();
            values.push(end);
            values
        }
    }
}

/// Check whether two coordinates coincide within [`COORD_TOLERANCE`]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= COORD_TOLERANCE
}

/// Check that consecutive values increase by more than [`COORD_TOLERANCE`]
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] - w[0] > COORD_TOLERANCE)
}

/// Local xz-vector for skewed members
///
/// `(width, -breadth)` rotated by 90° and normalized, i.e. the unit vector
/// along `[width, breadth]`. `breadth` carries the sign of the skew angle so
/// the same right-handed convention holds for both skew directions.
pub fn skew_vector(width: f64, breadth: f64) -> Vector2<f64> {
    // rotated 90° clockwise: (x, y) -> (y, -x)
    Vector2::new(width, breadth).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 24.6, 7);
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[6], 24.6);
        assert_relative_eq!(values[1], 4.1, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_approx_eq_tolerance() {
        assert!(approx_eq(7.0, 7.00005));
        assert!(!approx_eq(7.0, 7.001));
        assert!(!approx_eq(f64::NAN, 0.0));
    }

    #[test]
    fn test_strictly_increasing() {
        assert!(is_strictly_increasing(&[0.0, 1.0, 2.5]));
        assert!(!is_strictly_increasing(&[0.0, 1.0, 1.00001]));
        assert!(!is_strictly_increasing(&[0.0, 2.0, 1.0]));
    }

    #[test]
    fn test_skew_vector_is_unit() {
        for (width, breadth) in [(7.0, 6.3), (10.175, 0.0), (5.0, -0.97), (0.5, 12.0)] {
            let v = skew_vector(width, breadth);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_skew_vector_perpendicular_to_skew_edge() {
        let skew = 42.0_f64.to_radians();
        let width = 7.0;
        let breadth = width * skew.tan();
        let v = skew_vector(width, breadth);
        // skew edge runs along (-breadth, width)
        let dot = v.x * -breadth + v.y * width;
        assert_relative_eq!(dot, 0.0, epsilon = 1e-12);
    }
}
