//! Material properties

use serde::{Deserialize, Serialize};

/// Linear elastic material of a grillage member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity in Pa
    pub e: f64,
    /// Shear modulus in Pa
    pub g: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density in kg/m³
    pub rho: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, g: f64, nu: f64, rho: f64) -> Self {
        Self { e, g, nu, rho }
    }

    /// Isotropic material, G = E / (2 (1 + nu))
    pub fn isotropic(e: f64, nu: f64, rho: f64) -> Self {
        let g = e / (2.0 * (1.0 + nu));
        Self::new(e, g, nu, rho)
    }

    /// Deck concrete from its characteristic compressive strength (Pa)
    pub fn concrete(fc: f64) -> Self {
        // E = 4700 sqrt(f'c) with f'c in MPa
        let fc_mpa = fc / 1e6;
        let e = 4700.0 * fc_mpa.sqrt() * 1e6;
        Self::isotropic(e, 0.2, 2400.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::concrete(40e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isotropic_material() {
        let mat = Material::isotropic(200e9, 0.3, 7850.0);
        let expected_g = 200e9 / (2.0 * 1.3);
        assert!((mat.g - expected_g).abs() < 1.0);
    }

    #[test]
    fn test_concrete_properties() {
        let concrete = Material::concrete(25e6);
        assert!((concrete.e - 23.5e9).abs() < 1e3);
        assert_eq!(concrete.nu, 0.2);
    }
}
