//! Geometric transformations (local axis conventions) of grillage members

use serde::{Deserialize, Serialize};

/// Identifier of the local-axis convention applied to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GeomTransform {
    /// 1 - members along the span
    Longitudinal = 1,
    /// 2 - members following the skew angle
    Skew = 2,
    /// 3 - transverse members perpendicular to the span (orthogonal mesh)
    Orthogonal = 3,
}

impl GeomTransform {
    /// Transform tag used by the solver
    pub fn tag(&self) -> usize {
        *self as usize
    }

    /// Vector in the local x-z plane, given the skew xz-vector [v0, v1]
    pub fn vector_xz(&self, skew_vector: [f64; 2]) -> [f64; 3] {
        match self {
            GeomTransform::Longitudinal => [0.0, 0.0, 1.0],
            GeomTransform::Skew => [skew_vector[0], 0.0, skew_vector[1]],
            GeomTransform::Orthogonal => [1.0, 0.0, 0.0],
        }
    }
}

/// A transformation used by a mesh, with its resolved vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformDefinition {
    /// Which convention
    pub transform: GeomTransform,
    /// Vector in the local x-z plane
    pub vector_xz: [f64; 3],
}

impl TransformDefinition {
    /// Resolve a transform against the skew xz-vector of a mesh
    pub fn new(transform: GeomTransform, skew_vector: [f64; 2]) -> Self {
        Self {
            transform,
            vector_xz: transform.vector_xz(skew_vector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_vectors() {
        let v = [0.8, 0.6];
        assert_eq!(GeomTransform::Longitudinal.vector_xz(v), [0.0, 0.0, 1.0]);
        assert_eq!(GeomTransform::Skew.vector_xz(v), [0.8, 0.0, 0.6]);
        assert_eq!(GeomTransform::Orthogonal.vector_xz(v), [1.0, 0.0, 0.0]);
        assert_eq!(GeomTransform::Orthogonal.tag(), 3);
    }
}
