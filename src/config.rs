//! Mesh configuration and derived deck geometry

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GrillageError, MeshResult};
use crate::math::{approx_eq, is_strictly_increasing, linspace, skew_vector, COORD_TOLERANCE};
use crate::rules::GeometryRules;

/// Meshing strategy of the deck plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeshStrategy {
    /// Orthogonal region A plus triangular skew end regions B1/B2
    #[default]
    Orthogonal,
    /// Single sheared (parallelogram) mesh
    Skew,
}

impl fmt::Display for MeshStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshStrategy::Orthogonal => f.write_str("Orthogonal"),
            MeshStrategy::Skew => f.write_str("Skew"),
        }
    }
}

fn default_y_elevation() -> f64 {
    0.0
}

/// Bridge geometry and meshing options
///
/// Immutable once handed to [`crate::mesh::GrillageMesh::generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Span between support bearings (m)
    pub span: f64,
    /// Deck width measured along the support line when unskewed (m)
    pub width: f64,
    /// Skew angle in degrees
    pub skew: f64,
    /// Number of longitudinal girders
    pub num_long_grid: usize,
    /// Number of transverse grid lines along the span
    pub num_trans_grid: usize,
    /// Width of the cantilever edge (m)
    pub edge_width: f64,
    /// Requested meshing strategy
    #[serde(default)]
    pub strategy: MeshStrategy,
    /// Elevation of the grillage plane
    #[serde(default = "default_y_elevation")]
    pub y_elevation: f64,
    /// Custom positions along the span (skew strategy only)
    #[serde(default)]
    pub custom_nox: Option<Vec<f64>>,
    /// Custom station positions across the deck
    #[serde(default)]
    pub custom_noz: Option<Vec<f64>>,
    /// Spacing/density rules and skew thresholds
    #[serde(default)]
    pub rules: GeometryRules,
}

impl MeshConfig {
    /// Create a configuration with default strategy and rules
    pub fn new(
        span: f64,
        width: f64,
        skew: f64,
        num_long_grid: usize,
        num_trans_grid: usize,
        edge_width: f64,
    ) -> Self {
        Self {
            span,
            width,
            skew,
            num_long_grid,
            num_trans_grid,
            edge_width,
            strategy: MeshStrategy::default(),
            y_elevation: default_y_elevation(),
            custom_nox: None,
            custom_noz: None,
            rules: GeometryRules::default(),
        }
    }

    /// Set the meshing strategy
    pub fn with_strategy(mut self, strategy: MeshStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the grillage elevation
    pub fn with_y_elevation(mut self, y: f64) -> Self {
        self.y_elevation = y;
        self
    }

    /// Use custom positions along the span
    pub fn with_custom_nox(mut self, nox: Vec<f64>) -> Self {
        self.custom_nox = Some(nox);
        self
    }

    /// Use custom station positions across the deck
    pub fn with_custom_noz(mut self, noz: Vec<f64>) -> Self {
        self.custom_noz = Some(noz);
        self
    }

    /// Replace the geometry rules
    pub fn with_rules(mut self, rules: GeometryRules) -> Self {
        self.rules = rules;
        self
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> MeshResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Skew angle in radians
    pub fn skew_radians(&self) -> f64 {
        self.skew.to_radians()
    }

    /// Station positions across the deck (`step`)
    ///
    /// `[0, girders..., width]` with the girders evenly spread between the
    /// two cantilever edges, unless custom stations are supplied.
    pub fn stations(&self) -> Vec<f64> {
        if let Some(noz) = &self.custom_noz {
            return noz.clone();
        }
        let mut step = Vec::with_capacity(self.num_long_grid + 2);
        step.push(0.0);
        step.extend(linspace(
            self.edge_width,
            self.width - self.edge_width,
            self.num_long_grid,
        ));
        step.push(self.width);
        step
    }

    /// Reject degenerate geometry
    ///
    /// Checks are strategy-aware: for the orthogonal strategy region A must
    /// keep a positive length, the skew regions must not collapse onto
    /// coincident positions, and region A needs enough grid lines.
    pub fn validate(&self) -> MeshResult<()> {
        let finite = [self.span, self.width, self.skew, self.edge_width, self.y_elevation]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GrillageError::InvalidGeometry(
                "geometry values must be finite".to_string(),
            ));
        }
        if self.span <= 0.0 {
            return Err(GrillageError::InvalidGeometry(format!(
                "span must be positive, got {}",
                self.span
            )));
        }
        if self.width <= 0.0 {
            return Err(GrillageError::InvalidGeometry(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.edge_width < 0.0 {
            return Err(GrillageError::InvalidGeometry(format!(
                "edge width must not be negative, got {}",
                self.edge_width
            )));
        }
        if self.skew.abs() >= 90.0 {
            return Err(GrillageError::InvalidGeometry(format!(
                "skew angle must lie strictly between -90 and 90 degrees, got {}",
                self.skew
            )));
        }
        if self.num_trans_grid < 2 {
            return Err(GrillageError::InvalidGeometry(format!(
                "at least 2 transverse grid lines are required, got {}",
                self.num_trans_grid
            )));
        }

        let stations = self.stations();
        if stations.len() < 2 || !is_strictly_increasing(&stations) {
            return Err(GrillageError::InvalidGeometry(format!(
                "stations must be strictly increasing across the deck: {:?}",
                stations
            )));
        }
        if let Some(noz) = &self.custom_noz {
            let first = noz.first().copied().unwrap_or(f64::NAN);
            let last = noz.last().copied().unwrap_or(f64::NAN);
            if !approx_eq(first, 0.0) || !approx_eq(last, self.width) {
                return Err(GrillageError::InvalidGeometry(format!(
                    "custom stations must run from 0 to the deck width {}",
                    self.width
                )));
            }
        }
        if let Some(nox) = &self.custom_nox {
            if nox.len() < 2 || !is_strictly_increasing(nox) {
                return Err(GrillageError::InvalidGeometry(format!(
                    "custom span positions must be strictly increasing: {:?}",
                    nox
                )));
            }
        }

        if self.strategy == MeshStrategy::Orthogonal {
            let breadth = self.width * self.skew_radians().tan().abs();
            if self.span - breadth <= COORD_TOLERANCE {
                return Err(GrillageError::InvalidGeometry(format!(
                    "skew edge length {:.4} leaves no orthogonal region on a {} m span",
                    breadth, self.span
                )));
            }
            // skew-region positions are spaced by station gap * |tan(skew)|
            let min_gap = stations
                .windows(2)
                .map(|w| w[1] - w[0])
                .fold(f64::INFINITY, f64::min);
            let skew_gap = min_gap * self.skew_radians().tan().abs();
            if skew_gap <= COORD_TOLERANCE {
                return Err(GrillageError::InvalidGeometry(format!(
                    "skew of {} degrees gives coincident nodes in the skew regions (spacing {:e})",
                    self.skew, skew_gap
                )));
            }
            if self.num_trans_grid < self.rules.min_grid_ortho {
                return Err(GrillageError::InvalidGeometry(format!(
                    "orthogonal mesh needs at least {} transverse grid lines, got {}",
                    self.rules.min_grid_ortho, self.num_trans_grid
                )));
            }
        }
        Ok(())
    }
}

/// Geometry derived from a validated [`MeshConfig`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckGeometry {
    /// Span (m)
    pub span: f64,
    /// Deck width (m)
    pub width: f64,
    /// Skew angle in degrees
    pub skew: f64,
    /// tan(skew), signed
    pub tan_skew: f64,
    /// Length of the skew support line, `width / cos(skew)`
    pub trans_dim: f64,
    /// Signed extent of the skew edge along x, `trans_dim * sin(skew)`
    pub breadth: f64,
    /// Station positions across the deck
    pub stations: Vec<f64>,
    /// Elevation of the grillage plane
    pub y: f64,
    /// Unit xz-vector of skewed members
    pub skew_vector: [f64; 2],
}

impl DeckGeometry {
    /// Derive the deck geometry of a configuration
    pub fn derive(config: &MeshConfig) -> Self {
        let skew = config.skew_radians();
        let trans_dim = config.width / skew.cos();
        let breadth = trans_dim * skew.sin();
        let v = skew_vector(config.width, breadth);
        Self {
            span: config.span,
            width: config.width,
            skew: config.skew,
            tan_skew: skew.tan(),
            trans_dim,
            breadth,
            stations: config.stations(),
            y: config.y_elevation,
            skew_vector: [v.x, v.y],
        }
    }

    /// Number of stations
    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Distance of station `r` from the line through the acute corner
    ///
    /// Positive skew measures from z = 0, negative skew from z = width.
    pub fn corner_distance(&self, r: usize) -> f64 {
        if self.skew >= 0.0 {
            self.stations[r]
        } else {
            self.width - self.stations[r]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stations_layout() {
        let config = MeshConfig::new(24.6, 10.175, 0.0, 5, 7, 2.0);
        let step = config.stations();
        assert_eq!(step.len(), 7);
        assert_eq!(step[0], 0.0);
        assert_eq!(step[1], 2.0);
        assert_relative_eq!(step[5], 8.175, epsilon = 1e-12);
        assert_eq!(step[6], 10.175);
    }

    #[test]
    fn test_derived_breadth() {
        let config = MeshConfig::new(10.0, 7.0, 42.0, 7, 5, 1.0);
        let geom = DeckGeometry::derive(&config);
        assert_relative_eq!(geom.breadth, 7.0 * 42.0_f64.to_radians().tan(), epsilon = 1e-12);
        let negative = DeckGeometry::derive(&MeshConfig::new(10.0, 7.0, -42.0, 7, 5, 1.0));
        assert_relative_eq!(negative.breadth, -geom.breadth, epsilon = 1e-12);
        assert_relative_eq!(negative.corner_distance(0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_degenerate_geometry() {
        let base = MeshConfig::new(10.0, 7.0, 20.0, 3, 5, 1.0).with_strategy(MeshStrategy::Skew);
        assert!(base.validate().is_ok());

        let mut zero_span = base.clone();
        zero_span.span = 0.0;
        assert!(matches!(zero_span.validate(), Err(GrillageError::InvalidGeometry(_))));

        let mut one_line = base.clone();
        one_line.num_trans_grid = 1;
        assert!(matches!(one_line.validate(), Err(GrillageError::InvalidGeometry(_))));

        let overlapping_edges = MeshConfig::new(10.0, 2.0, 0.0, 3, 5, 1.5);
        assert!(overlapping_edges.validate().is_err());
    }

    #[test]
    fn test_validate_orthogonal_region_a() {
        // 7 m wide at 60° gives a skew edge longer than the span
        let config = MeshConfig::new(10.0, 7.0, 60.0, 3, 5, 1.0);
        assert!(matches!(config.validate(), Err(GrillageError::InvalidGeometry(_))));
    }

    #[test]
    fn test_validate_orthogonal_skew_regions() {
        // 1 m station gaps at 0.0001° put skew-region nodes ~2e-6 m apart
        let tiny = MeshConfig::new(10.0, 7.0, 0.0001, 3, 5, 1.0);
        match tiny.validate() {
            Err(GrillageError::InvalidGeometry(msg)) => assert!(msg.contains("coincident")),
            other => panic!("expected invalid geometry, got {other:?}"),
        }
        let skew_strategy = tiny.clone().with_strategy(MeshStrategy::Skew);
        assert!(skew_strategy.validate().is_ok());
        assert!(MeshConfig::new(10.0, 7.0, 20.0, 3, 5, 1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_custom_nox_order() {
        let base = MeshConfig::new(20.0, 6.0, 15.0, 2, 5, 1.0).with_strategy(MeshStrategy::Skew);
        let reversed = base.clone().with_custom_nox(vec![0.0, 10.0, 5.0, 20.0]);
        assert!(matches!(reversed.validate(), Err(GrillageError::InvalidGeometry(_))));
        let repeated = base.clone().with_custom_nox(vec![0.0, 10.0, 10.0, 20.0]);
        assert!(matches!(repeated.validate(), Err(GrillageError::InvalidGeometry(_))));
        let single = base.clone().with_custom_nox(vec![0.0]);
        assert!(matches!(single.validate(), Err(GrillageError::InvalidGeometry(_))));
        assert!(base.with_custom_nox(vec![0.0, 5.0, 20.0]).validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "span": 24.6, "width": 10.175, "skew": 0.0,
            "num_long_grid": 5, "num_trans_grid": 7, "edge_width": 2.0,
            "strategy": "Skew"
        }"#;
        let config = MeshConfig::from_json_str(json).unwrap();
        assert_eq!(config.strategy, MeshStrategy::Skew);
        assert_eq!(config.rules, GeometryRules::default());
        assert_eq!(config.y_elevation, 0.0);
    }
}
