//! Node element - a grillage grid point

use serde::{Deserialize, Serialize};

/// A node of the grillage mesh
///
/// `x` runs along the span, `y` is the (constant) deck elevation and `z`
/// runs across the deck. Tags are 1-based and follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node tag (1-based)
    pub tag: usize,
    /// X coordinate (longitudinal)
    pub x: f64,
    /// Y coordinate (elevation)
    pub y: f64,
    /// Z coordinate (transverse)
    pub z: f64,
}

impl Node {
    /// Create a new node
    pub fn new(tag: usize, x: f64, y: f64, z: f64) -> Self {
        Self { tag, x, y, z }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Plan distance to a point (x, z) on the deck
    pub fn plan_distance_to(&self, x: f64, z: f64) -> f64 {
        ((x - self.x).powi(2) + (z - self.z).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(4, 1.0, 0.0, 3.0);
        assert_eq!(node.tag, 4);
        assert_eq!(node.coords(), [1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(1, 0.0, 0.0, 0.0);
        let n2 = Node::new(2, 3.0, 0.0, 4.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
        assert!((n1.plan_distance_to(3.0, 4.0) - 5.0).abs() < 1e-10);
    }
}
