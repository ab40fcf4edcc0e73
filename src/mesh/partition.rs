//! Choice of meshing strategy

use log::info;

use crate::config::MeshStrategy;
use crate::error::MeshResult;
use crate::rules::GeometryRules;

/// Confirms a requested strategy against the skew thresholds
#[derive(Debug, Clone, Copy)]
pub struct MeshPartitioner<'a> {
    rules: &'a GeometryRules,
}

impl<'a> MeshPartitioner<'a> {
    pub fn new(rules: &'a GeometryRules) -> Self {
        Self { rules }
    }

    /// Confirm `requested` for `skew` (degrees)
    ///
    /// # Errors
    /// [`crate::error::GrillageError::Configuration`] when the thresholds
    /// forbid the strategy at this angle.
    pub fn partition(&self, skew: f64, requested: MeshStrategy) -> MeshResult<MeshStrategy> {
        self.rules.validate(skew, requested)?;
        let [low, high] = self.rules.skew_threshold;
        match requested {
            MeshStrategy::Orthogonal => info!(
                "orthogonal meshing, skew angle {} above threshold {}",
                skew, low
            ),
            MeshStrategy::Skew => info!(
                "skew meshing, skew angle {} below threshold {}",
                skew, high
            ),
        }
        Ok(requested)
    }

    /// Strategies the thresholds allow at `skew`
    pub fn allowed(&self, skew: f64) -> Vec<MeshStrategy> {
        [MeshStrategy::Orthogonal, MeshStrategy::Skew]
            .into_iter()
            .filter(|s| self.rules.validate(skew, *s).is_ok())
            .collect()
    }

    /// Preferred strategy at `skew`: skew meshing while it is allowed
    pub fn recommend(&self, skew: f64) -> MeshStrategy {
        if self.rules.validate(skew, MeshStrategy::Skew).is_ok() {
            MeshStrategy::Skew
        } else {
            MeshStrategy::Orthogonal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrillageError;

    #[test]
    fn test_partition_confirms_request() {
        let rules = GeometryRules::default();
        let partitioner = MeshPartitioner::new(&rules);
        assert_eq!(
            partitioner.partition(20.0, MeshStrategy::Orthogonal).unwrap(),
            MeshStrategy::Orthogonal
        );
        assert!(matches!(
            partitioner.partition(45.0, MeshStrategy::Skew),
            Err(GrillageError::Configuration { .. })
        ));
    }

    #[test]
    fn test_allowed_strategies() {
        let rules = GeometryRules::default();
        let partitioner = MeshPartitioner::new(&rules);
        assert_eq!(partitioner.allowed(5.0), vec![MeshStrategy::Skew]);
        assert_eq!(partitioner.allowed(20.0).len(), 2);
        assert_eq!(partitioner.allowed(-40.0), vec![MeshStrategy::Orthogonal]);
        assert_eq!(partitioner.recommend(40.0), MeshStrategy::Orthogonal);
        assert_eq!(partitioner.recommend(20.0), MeshStrategy::Skew);
    }
}
