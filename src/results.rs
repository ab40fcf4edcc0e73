//! Summary statistics of a generated mesh

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::MeshStrategy;
use crate::elements::{MemberGroup, SectionGroup, SupportEdge};
use crate::mesh::GrillageMesh;

/// Counts and extents of a generated grillage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSummary {
    /// Strategy used
    pub strategy: MeshStrategy,
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of elements
    pub num_elements: usize,
    /// Nodes on the start support line
    pub num_start_supports: usize,
    /// Nodes on the end support line
    pub num_end_supports: usize,
    /// Elements per member collection
    pub members_per_group: BTreeMap<MemberGroup, usize>,
    /// Elements per section group id
    pub members_per_section: BTreeMap<u8, usize>,
    /// Total member length
    pub total_length: f64,
    /// Shortest member
    pub min_length: f64,
    /// Longest member
    pub max_length: f64,
    /// Plan extent along x (min, max)
    pub x_range: (f64, f64),
    /// Total DOFs
    pub total_dofs: usize,
    /// Free DOFs after support restraints
    pub free_dofs: usize,
}

impl MeshSummary {
    /// Collect the statistics of a mesh
    pub fn from_mesh(mesh: &GrillageMesh) -> Self {
        let mut members_per_group = BTreeMap::new();
        let mut members_per_section = BTreeMap::new();
        let mut total_length = 0.0;
        let mut min_length = f64::INFINITY;
        let mut max_length: f64 = 0.0;

        for element in mesh.elements() {
            *members_per_group.entry(element.group).or_insert(0) += 1;
            *members_per_section.entry(element.section.id()).or_insert(0) += 1;
            if let (Ok(i), Ok(j)) = (mesh.node(element.i_node), mesh.node(element.j_node)) {
                let length = i.distance_to(j);
                total_length += length;
                min_length = min_length.min(length);
                max_length = max_length.max(length);
            }
        }
        if mesh.elements().is_empty() {
            min_length = 0.0;
        }

        let x_range = mesh
            .nodes()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), n| {
                (lo.min(n.x), hi.max(n.x))
            });

        let count_edge = |edge: SupportEdge| mesh.supports().iter().filter(|s| s.edge == edge).count();
        let restrained: usize = mesh.supports().iter().map(|s| s.support.num_restrained()).sum();
        let total_dofs = mesh.nodes().len() * 6;

        Self {
            strategy: mesh.strategy(),
            num_nodes: mesh.nodes().len(),
            num_elements: mesh.elements().len(),
            num_start_supports: count_edge(SupportEdge::Start),
            num_end_supports: count_edge(SupportEdge::End),
            members_per_group,
            members_per_section,
            total_length,
            min_length,
            max_length,
            x_range,
            total_dofs,
            free_dofs: total_dofs.saturating_sub(restrained),
        }
    }

    /// Element count of a member collection
    pub fn group_count(&self, group: MemberGroup) -> usize {
        self.members_per_group.get(&group).copied().unwrap_or(0)
    }

    /// Element count of a section group
    pub fn section_count(&self, section: SectionGroup) -> usize {
        self.members_per_section
            .get(&section.id())
            .copied()
            .unwrap_or(0)
    }
}
