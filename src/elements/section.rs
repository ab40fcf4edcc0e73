//! Section properties for grillage members

use serde::{Deserialize, Serialize};

/// Beam formulation used when emitting a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BeamElementType {
    /// Euler-Bernoulli beam-column
    #[default]
    ElasticBeamColumn,
    /// Timoshenko beam (requires shear areas)
    ElasticTimoshenkoBeam,
}

impl BeamElementType {
    /// Solver element name
    pub fn name(&self) -> &'static str {
        match self {
            BeamElementType::ElasticBeamColumn => "elasticBeamColumn",
            BeamElementType::ElasticTimoshenkoBeam => "ElasticTimoshenkoBeam",
        }
    }
}

/// Cross-section properties of a grillage member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSection {
    /// Cross-sectional area in m²
    pub a: f64,
    /// Moment of inertia about local y-axis in m⁴
    pub iy: f64,
    /// Moment of inertia about local z-axis in m⁴
    pub iz: f64,
    /// Torsional constant in m⁴
    pub j: f64,
    /// Shear area along local y (optional) in m²
    #[serde(default)]
    pub ay: Option<f64>,
    /// Shear area along local z (optional) in m²
    #[serde(default)]
    pub az: Option<f64>,
    /// Beam formulation
    #[serde(default)]
    pub element_type: BeamElementType,
}

impl MemberSection {
    /// Create a new section with basic properties
    pub fn new(a: f64, iy: f64, iz: f64, j: f64) -> Self {
        Self {
            a,
            iy,
            iz,
            j,
            ay: None,
            az: None,
            element_type: BeamElementType::default(),
        }
    }

    /// Rectangular section of a slab strip or edge beam
    pub fn rectangular(width: f64, depth: f64) -> Self {
        let a = width * depth;
        let iy = width * depth.powi(3) / 12.0;
        let iz = depth * width.powi(3) / 12.0;

        let (long, short) = if width > depth { (width, depth) } else { (depth, width) };
        let j = long * short.powi(3) / 3.0 * (1.0 - 0.63 * short / long);

        Self::new(a, iy, iz, j)
    }

    /// Slab strip of unit width per metre run
    ///
    /// Torsion of a wide thin plate strip is taken as `b t³ / 6`.
    pub fn slab_strip(width: f64, thickness: f64) -> Self {
        let mut section = Self::rectangular(width, thickness);
        section.j = width * thickness.powi(3) / 6.0;
        section
    }

    /// Switch to a Timoshenko beam with the given shear areas
    pub fn with_shear_areas(mut self, ay: f64, az: f64) -> Self {
        self.ay = Some(ay);
        self.az = Some(az);
        self.element_type = BeamElementType::ElasticTimoshenkoBeam;
        self
    }

    /// Shear areas, falling back to the gross area
    pub fn shear_areas(&self) -> (f64, f64) {
        (self.ay.unwrap_or(self.a), self.az.unwrap_or(self.a))
    }

    /// Check that every property is positive and finite
    pub fn is_valid(&self) -> bool {
        [self.a, self.iy, self.iz, self.j]
            .iter()
            .chain(self.ay.iter())
            .chain(self.az.iter())
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_section() {
        let section = MemberSection::rectangular(0.3, 0.5);
        assert_relative_eq!(section.a, 0.15, epsilon = 1e-12);
        assert_relative_eq!(section.iy, 0.3 * 0.5_f64.powi(3) / 12.0, epsilon = 1e-12);
        assert!(section.is_valid());
    }

    #[test]
    fn test_timoshenko_switch() {
        let section = MemberSection::new(0.896, 0.358, 0.0125, 0.0417).with_shear_areas(0.5, 0.6);
        assert_eq!(section.element_type, BeamElementType::ElasticTimoshenkoBeam);
        assert_eq!(section.shear_areas(), (0.5, 0.6));
        assert_eq!(MemberSection::new(1.0, 1.0, 1.0, 1.0).shear_areas(), (1.0, 1.0));
    }

    #[test]
    fn test_invalid_section() {
        assert!(!MemberSection::new(0.0, 1.0, 1.0, 1.0).is_valid());
        assert!(!MemberSection::new(1.0, f64::NAN, 1.0, 1.0).is_valid());
    }
}
