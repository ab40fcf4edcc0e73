//! Beam element of the grillage

use serde::{Deserialize, Serialize};

use super::{GeomTransform, MemberGroup, SectionGroup};

/// A two-node grillage member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element tag (1-based, generation order)
    pub tag: usize,
    /// Tag of the i-node
    pub i_node: usize,
    /// Tag of the j-node
    pub j_node: usize,
    /// Member collection the element belongs to
    pub group: MemberGroup,
    /// Section/material key
    pub section: SectionGroup,
    /// Local-axis convention
    pub transform: GeomTransform,
}

impl Element {
    /// Create a new element
    pub fn new(
        tag: usize,
        i_node: usize,
        j_node: usize,
        group: MemberGroup,
        section: SectionGroup,
        transform: GeomTransform,
    ) -> Self {
        Self {
            tag,
            i_node,
            j_node,
            group,
            section,
            transform,
        }
    }

    /// Node tags as an (i, j) pair
    pub fn nodes(&self) -> (usize, usize) {
        (self.i_node, self.j_node)
    }

    /// Whether the element connects the given node
    pub fn connects(&self, node: usize) -> bool {
        self.i_node == node || self.j_node == node
    }
}
