//! Boundary conditions on the support lines

use serde::{Deserialize, Serialize};

/// Restrained degrees of freedom at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Support {
    /// Restrained in X translation
    pub dx: bool,
    /// Restrained in Y translation
    pub dy: bool,
    /// Restrained in Z translation
    pub dz: bool,
    /// Restrained in X rotation
    pub rx: bool,
    /// Restrained in Y rotation
    pub ry: bool,
    /// Restrained in Z rotation
    pub rz: bool,
}

impl Support {
    /// Pinned support (translations restrained, rotations free)
    pub fn pinned() -> Self {
        Self {
            dx: true,
            dy: true,
            dz: true,
            ..Default::default()
        }
    }

    /// Roller free to slide along the span (Y and Z translation restrained)
    pub fn roller_x() -> Self {
        Self {
            dy: true,
            dz: true,
            ..Default::default()
        }
    }

    /// Create a support from a fixity array [DX, DY, DZ, RX, RY, RZ]
    pub fn from_fixity(fixity: [bool; 6]) -> Self {
        Self {
            dx: fixity[0],
            dy: fixity[1],
            dz: fixity[2],
            rx: fixity[3],
            ry: fixity[4],
            rz: fixity[5],
        }
    }

    /// Fixity flags as 0/1 values, in DOF order
    pub fn fixity(&self) -> [u8; 6] {
        [self.dx, self.dy, self.dz, self.rx, self.ry, self.rz].map(u8::from)
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.fixity().iter().filter(|&&f| f == 1).count()
    }
}

/// Which support line a node sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupportEdge {
    /// x = 0 end of the deck (pinned)
    Start,
    /// x = span end of the deck (roller)
    End,
}

impl SupportEdge {
    /// Default boundary condition for the support line
    pub fn default_support(&self) -> Support {
        match self {
            SupportEdge::Start => Support::pinned(),
            SupportEdge::End => Support::roller_x(),
        }
    }
}

/// A supported node of the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSupport {
    /// Node tag
    pub node: usize,
    /// Support line
    pub edge: SupportEdge,
    /// Restraints applied
    pub support: Support,
}

impl NodeSupport {
    /// Support a node with the default condition of its support line
    pub fn on_edge(node: usize, edge: SupportEdge) -> Self {
        Self {
            node,
            edge,
            support: edge.default_support(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_support() {
        let support = Support::pinned();
        assert_eq!(support.fixity(), [1, 1, 1, 0, 0, 0]);
        assert_eq!(support.num_restrained(), 3);
    }

    #[test]
    fn test_roller_support() {
        let support = Support::roller_x();
        assert_eq!(support.fixity(), [0, 1, 1, 0, 0, 0]);
        assert_eq!(Support::from_fixity([false, true, true, false, false, false]), support);
    }

    #[test]
    fn test_edge_defaults() {
        let end = NodeSupport::on_edge(12, SupportEdge::End);
        assert_eq!(end.support, Support::roller_x());
        assert_eq!(SupportEdge::Start.default_support(), Support::pinned());
    }
}
