//! Structural grouping of grillage members

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a member in the grillage (which member collection it belongs to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberGroup {
    /// Longitudinal member on an interior girder line
    LongitudinalInterior,
    /// Longitudinal member on the first (z = 0) edge line
    LongitudinalEdge1,
    /// Longitudinal member on the last (z = width) edge line
    LongitudinalEdge2,
    /// Transverse slab member
    TransverseInterior,
    /// Transverse member on the start side
    TransverseEdge1,
    /// Transverse member on the end side
    TransverseEdge2,
}

impl MemberGroup {
    /// All groups in collection order
    pub const ALL: [MemberGroup; 6] = [
        MemberGroup::LongitudinalInterior,
        MemberGroup::LongitudinalEdge1,
        MemberGroup::LongitudinalEdge2,
        MemberGroup::TransverseInterior,
        MemberGroup::TransverseEdge1,
        MemberGroup::TransverseEdge2,
    ];

    /// Whether members of this group run along the span
    pub fn is_longitudinal(&self) -> bool {
        matches!(
            self,
            MemberGroup::LongitudinalInterior
                | MemberGroup::LongitudinalEdge1
                | MemberGroup::LongitudinalEdge2
        )
    }

    /// Collection name used in reports and script comments
    pub fn name(&self) -> &'static str {
        match self {
            MemberGroup::LongitudinalInterior => "long_mem",
            MemberGroup::LongitudinalEdge1 => "long_edge_1",
            MemberGroup::LongitudinalEdge2 => "long_edge_2",
            MemberGroup::TransverseInterior => "trans_mem",
            MemberGroup::TransverseEdge1 => "trans_edge_1",
            MemberGroup::TransverseEdge2 => "trans_edge_2",
        }
    }
}

impl fmt::Display for MemberGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Section/material key of a member (1-6)
///
/// Member property sets are supplied per section group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionGroup {
    /// 1 - interior longitudinal girder
    Longitudinal = 1,
    /// 2 - edge beam
    EdgeBeam = 2,
    /// 3 - transverse slab
    Slab = 3,
    /// 4 - edge slab
    EdgeSlab = 4,
    /// 5 - transverse slab inside a triangular skew region
    SkewSlab = 5,
    /// 6 - skew support edge
    SkewEdge = 6,
}

impl SectionGroup {
    /// All section groups in id order
    pub const ALL: [SectionGroup; 6] = [
        SectionGroup::Longitudinal,
        SectionGroup::EdgeBeam,
        SectionGroup::Slab,
        SectionGroup::EdgeSlab,
        SectionGroup::SkewSlab,
        SectionGroup::SkewEdge,
    ];

    /// Numeric id (1-6)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Look up a section group by its numeric id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }
}

impl fmt::Display for SectionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_group_ids() {
        for (i, group) in SectionGroup::ALL.iter().enumerate() {
            assert_eq!(group.id() as usize, i + 1);
            assert_eq!(SectionGroup::from_id(group.id()), Some(*group));
        }
        assert_eq!(SectionGroup::from_id(0), None);
        assert_eq!(SectionGroup::from_id(7), None);
    }

    #[test]
    fn test_member_group_direction() {
        assert!(MemberGroup::LongitudinalEdge2.is_longitudinal());
        assert!(!MemberGroup::TransverseEdge1.is_longitudinal());
        assert_eq!(MemberGroup::TransverseEdge2.to_string(), "trans_edge_2");
    }
}
