//! Inverse bilinear mapping for quadrilateral grid cells
//!
//! A point inside a cell formed by four grillage nodes is located by its
//! natural coordinates (r, s) in [-1, 1]², using the standard bilinear
//! shape functions:
//! N1 = (1-r)(1-s)/4, N2 = (1+r)(1-s)/4, N3 = (1+r)(1+s)/4, N4 = (1-r)(1+s)/4
//!
//! Corners are ordered counter-clockwise starting at (-1, -1).

use nalgebra::{Matrix2, Vector2};

use crate::error::{GrillageError, MeshResult};

/// Fixed starting point of the Newton iteration
///
/// Deliberately away from the cell centre so the first Jacobian is never
/// evaluated at a point that is already the solution.
pub const NATURAL_INITIAL_GUESS: [f64; 2] = [-0.4444444444444, 0.99999999];

/// Residual tolerance of the Newton iteration (plan units)
pub const NATURAL_TOLERANCE: f64 = 1e-10;

/// Iteration cap before reporting [`GrillageError::ConvergenceFailed`]
pub const NATURAL_MAX_ITERATIONS: usize = 50;

/// Distance under which a point is taken to be the cell centre
const CENTRE_TOLERANCE: f64 = 1e-8;

/// Bilinear shape functions evaluated at (r, s)
pub fn shape_functions(r: f64, s: f64) -> [f64; 4] {
    [
        (1.0 - r) * (1.0 - s) / 4.0,
        (1.0 + r) * (1.0 - s) / 4.0,
        (1.0 + r) * (1.0 + s) / 4.0,
        (1.0 - r) * (1.0 + s) / 4.0,
    ]
}

/// Map natural coordinates to plan coordinates (x, z)
pub fn map_to_plan(r: f64, s: f64, corners: &[[f64; 2]; 4]) -> [f64; 2] {
    let n = shape_functions(r, s);
    let mut point = [0.0; 2];
    for (ni, corner) in n.iter().zip(corners.iter()) {
        point[0] += ni * corner[0];
        point[1] += ni * corner[1];
    }
    point
}

/// Jacobian of the bilinear map [[dx/dr, dx/ds], [dz/dr, dz/ds]]
fn jacobian(r: f64, s: f64, corners: &[[f64; 2]; 4]) -> Matrix2<f64> {
    // dN/dr and dN/ds for N1..N4
    let dn_dr = [-(1.0 - s) / 4.0, (1.0 - s) / 4.0, (1.0 + s) / 4.0, -(1.0 + s) / 4.0];
    let dn_ds = [-(1.0 - r) / 4.0, -(1.0 + r) / 4.0, (1.0 + r) / 4.0, (1.0 - r) / 4.0];

    let mut j = Matrix2::zeros();
    for i in 0..4 {
        j[(0, 0)] += dn_dr[i] * corners[i][0];
        j[(0, 1)] += dn_ds[i] * corners[i][0];
        j[(1, 0)] += dn_dr[i] * corners[i][1];
        j[(1, 1)] += dn_ds[i] * corners[i][1];
    }
    j
}

/// Natural coordinates (r, s) of plan point (xp, zp) inside a quadrilateral
///
/// # Arguments
/// * `xp`, `zp` - Plan coordinates of the point
/// * `corners` - Cell corners as (x, z), counter-clockwise from (-1, -1)
///
/// Points at the centre of the cell short-circuit to (0, 0).
///
/// # Errors
/// [`GrillageError::ConvergenceFailed`] when the Jacobian becomes singular or
/// the residual does not drop below [`NATURAL_TOLERANCE`] within
/// [`NATURAL_MAX_ITERATIONS`] steps.
pub fn natural_coordinates(xp: f64, zp: f64, corners: &[[f64; 2]; 4]) -> MeshResult<[f64; 2]> {
    let centre_x = (corners[0][0] + corners[1][0]) / 2.0;
    let centre_z = (corners[0][1] + corners[2][1]) / 2.0;
    if (xp - centre_x).abs() <= CENTRE_TOLERANCE && (zp - centre_z).abs() <= CENTRE_TOLERANCE {
        return Ok([0.0, 0.0]);
    }

    let target = Vector2::new(xp, zp);
    let mut rs = Vector2::new(NATURAL_INITIAL_GUESS[0], NATURAL_INITIAL_GUESS[1]);

    for iteration in 0..NATURAL_MAX_ITERATIONS {
        let mapped = map_to_plan(rs.x, rs.y, corners);
        let residual = Vector2::new(mapped[0], mapped[1]) - target;
        if residual.norm() < NATURAL_TOLERANCE {
            return Ok([rs.x, rs.y]);
        }

        let j = jacobian(rs.x, rs.y, corners);
        let delta = j
            .lu()
            .solve(&(-residual))
            .ok_or(GrillageError::ConvergenceFailed(iteration + 1))?;
        rs += delta;
    }

    Err(GrillageError::ConvergenceFailed(NATURAL_MAX_ITERATIONS))
}
