//! Spacing/density rules and skew thresholds

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{MeshConfig, MeshStrategy};
use crate::error::{GrillageError, MeshResult};

/// Direction a grid rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridDirection {
    /// Along the span (node positions on a girder line)
    Longitudinal,
    /// Across the deck (station layout)
    Transverse,
}

/// Non-fatal observation about a configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// Largest grid spacing lies outside the configured range
    SpacingOutOfRange {
        direction: GridDirection,
        spacing: f64,
        min: f64,
        max: f64,
    },
    /// Fewer grid lines than recommended
    GridCountBelowMinimum {
        direction: GridDirection,
        count: usize,
        minimum: usize,
    },
}

/// Mesh density rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryRules {
    /// Minimum spacing along the span (m)
    pub min_long_spacing: f64,
    /// Maximum spacing along the span (m)
    pub max_long_spacing: f64,
    /// Minimum spacing across the deck (m)
    pub min_trans_spacing: f64,
    /// Maximum spacing across the deck (m)
    pub max_trans_spacing: f64,
    /// Recommended number of grid lines along the span
    pub min_grid_long: usize,
    /// Recommended number of stations across the deck
    pub min_grid_trans: usize,
    /// Minimum transverse grid lines of the orthogonal region
    pub min_grid_ortho: usize,
    /// Skew thresholds `[low, high]` in degrees
    pub skew_threshold: [f64; 2],
}

impl Default for GeometryRules {
    fn default() -> Self {
        Self {
            min_long_spacing: 1.0,
            max_long_spacing: 2.0,
            min_trans_spacing: 1.0,
            max_trans_spacing: 2.0,
            min_grid_long: 9,
            min_grid_trans: 5,
            min_grid_ortho: 3,
            skew_threshold: [10.0, 30.0],
        }
    }
}

impl GeometryRules {
    /// Create the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skew thresholds
    pub fn with_skew_threshold(mut self, low: f64, high: f64) -> Self {
        self.skew_threshold = [low, high];
        self
    }

    /// Set the minimum grid count of the orthogonal region
    pub fn with_min_grid_ortho(mut self, min_grid_ortho: usize) -> Self {
        self.min_grid_ortho = min_grid_ortho;
        self
    }

    /// Set the spacing range along the span
    pub fn with_long_spacing(mut self, min: f64, max: f64) -> Self {
        self.min_long_spacing = min;
        self.max_long_spacing = max;
        self
    }

    /// Set the spacing range across the deck
    pub fn with_trans_spacing(mut self, min: f64, max: f64) -> Self {
        self.min_trans_spacing = min;
        self.max_trans_spacing = max;
        self
    }

    /// Check the rules themselves are consistent
    pub fn check(&self) -> MeshResult<()> {
        let [low, high] = self.skew_threshold;
        if !(low.is_finite() && high.is_finite()) || low < 0.0 || low >= high {
            return Err(GrillageError::InvalidInput(format!(
                "skew thresholds must satisfy 0 <= low < high, got [{}, {}]",
                low, high
            )));
        }
        let spacings = [
            (self.min_long_spacing, self.max_long_spacing),
            (self.min_trans_spacing, self.max_trans_spacing),
        ];
        for (min, max) in spacings {
            if min < 0.0 || min > max {
                return Err(GrillageError::InvalidInput(format!(
                    "spacing range [{}, {}] is invalid",
                    min, max
                )));
            }
        }
        Ok(())
    }

    /// Check a skew angle against the strategy thresholds
    ///
    /// The orthogonal strategy needs `|skew| > low`; the skew strategy
    /// needs `|skew| < high`.
    pub fn validate(&self, skew: f64, strategy: MeshStrategy) -> MeshResult<()> {
        let [low, high] = self.skew_threshold;
        let magnitude = skew.abs();
        let rejected = match strategy {
            MeshStrategy::Orthogonal => magnitude <= low,
            MeshStrategy::Skew => magnitude >= high,
        };
        if rejected {
            return Err(GrillageError::Configuration {
                strategy,
                skew,
                low,
                high,
            });
        }
        Ok(())
    }

    /// Non-fatal advisories for a configuration, each also logged as a warning
    pub fn advise(&self, config: &MeshConfig) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        let along_span = config
            .custom_nox
            .as_ref()
            .filter(|_| config.strategy == MeshStrategy::Skew)
            .map(|nox| (nox.len(), max_gap(nox)))
            .unwrap_or_else(|| {
                let gaps = config.num_trans_grid.saturating_sub(1).max(1);
                (config.num_trans_grid, config.span / gaps as f64)
            });
        let stations = config.stations();
        let across = (stations.len(), max_gap(&stations));

        let checks = [
            (
                GridDirection::Longitudinal,
                along_span,
                self.min_long_spacing,
                self.max_long_spacing,
                self.min_grid_long,
            ),
            (
                GridDirection::Transverse,
                across,
                self.min_trans_spacing,
                self.max_trans_spacing,
                self.min_grid_trans,
            ),
        ];
        for (direction, (count, spacing), min, max, minimum) in checks {
            if spacing < min || spacing > max {
                advisories.push(Advisory::SpacingOutOfRange {
                    direction,
                    spacing,
                    min,
                    max,
                });
            }
            if count < minimum {
                advisories.push(Advisory::GridCountBelowMinimum {
                    direction,
                    count,
                    minimum,
                });
            }
        }

        for advisory in &advisories {
            match advisory {
                Advisory::SpacingOutOfRange {
                    direction,
                    spacing,
                    min,
                    max,
                } => warn!(
                    "{:?} spacing {:.3} m outside recommended range [{}, {}]",
                    direction, spacing, min, max
                ),
                Advisory::GridCountBelowMinimum {
                    direction,
                    count,
                    minimum,
                } => warn!(
                    "{:?} grid count {} below recommended minimum {}",
                    direction, count, minimum
                ),
            }
        }
        advisories
    }
}

fn max_gap(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let rules = GeometryRules::default();
        assert!(rules.validate(10.0, MeshStrategy::Orthogonal).is_err());
        assert!(rules.validate(11.0, MeshStrategy::Orthogonal).is_ok());
        assert!(rules.validate(-10.0, MeshStrategy::Orthogonal).is_err());
        assert!(rules.validate(30.0, MeshStrategy::Skew).is_err());
        assert!(rules.validate(-29.0, MeshStrategy::Skew).is_ok());
        assert!(rules.validate(0.0, MeshStrategy::Skew).is_ok());
    }

    #[test]
    fn test_configuration_error_fields() {
        let err = GeometryRules::default()
            .validate(0.0, MeshStrategy::Orthogonal)
            .unwrap_err();
        match err {
            GrillageError::Configuration {
                strategy, low, high, ..
            } => {
                assert_eq!(strategy, MeshStrategy::Orthogonal);
                assert_eq!((low, high), (10.0, 30.0));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_check_rejects_inverted_thresholds() {
        let rules = GeometryRules::default().with_skew_threshold(30.0, 10.0);
        assert!(matches!(rules.check(), Err(GrillageError::InvalidInput(_))));
        assert!(GeometryRules::default().check().is_ok());
    }

    #[test]
    fn test_advise_coarse_mesh() {
        // 24.6 m over 6 bays is 4.1 m along the span
        let config = MeshConfig::new(24.6, 10.175, 0.0, 5, 7, 2.0);
        let advisories = GeometryRules::default().advise(&config);
        assert!(advisories.contains(&Advisory::GridCountBelowMinimum {
            direction: GridDirection::Longitudinal,
            count: 7,
            minimum: 9,
        }));
        assert!(advisories.iter().any(|a| matches!(
            a,
            Advisory::SpacingOutOfRange {
                direction: GridDirection::Longitudinal,
                ..
            }
        )));
    }
}
