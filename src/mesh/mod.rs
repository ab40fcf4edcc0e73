//! Grillage mesh generation
//!
//! [`GrillageMesh::generate`] runs one complete pass: strategy check,
//! geometry validation, node generation and connectivity. The pass owns a
//! fresh [`MeshState`]; only a finished mesh is ever returned.

mod connectivity;
mod nodes;
mod partition;
mod region;

pub use connectivity::ConnectivityBuilder;
pub use nodes::{NodeGenerator, OrthogonalLayout};
pub use partition::MeshPartitioner;
pub use region::{Cell, MeshState, RegionKind, RegionLayout, RowSpan};

use log::{info, warn};
use serde::Serialize;

use crate::config::{DeckGeometry, MeshConfig, MeshStrategy};
use crate::elements::{
    Element, GeomTransform, MemberGroup, Node, NodeSupport, SectionGroup, TransformDefinition,
};
use crate::error::{GrillageError, MeshResult};
use crate::math::{linspace, natural_coordinates};
use crate::results::MeshSummary;
use crate::rules::Advisory;

/// A generated grillage: read-only nodes, elements and supports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrillageMesh {
    strategy: MeshStrategy,
    geometry: DeckGeometry,
    nodes: Vec<Node>,
    elements: Vec<Element>,
    supports: Vec<NodeSupport>,
    transforms: Vec<TransformDefinition>,
    advisories: Vec<Advisory>,
}

impl GrillageMesh {
    /// Generate the mesh of a configuration
    ///
    /// # Errors
    /// - [`GrillageError::InvalidInput`] for inconsistent rules
    /// - [`GrillageError::Configuration`] when the skew thresholds forbid the
    ///   requested strategy
    /// - [`GrillageError::InvalidGeometry`] for degenerate geometry
    /// - [`GrillageError::MeshConsistency`] if connectivity cannot be
    ///   derived from the generated layout
    pub fn generate(config: &MeshConfig) -> MeshResult<Self> {
        config.rules.check()?;
        let strategy = MeshPartitioner::new(&config.rules).partition(config.skew, config.strategy)?;
        config.validate()?;
        let advisories = config.rules.advise(config);

        let geometry = DeckGeometry::derive(config);
        let mut state = MeshState::new();
        let nodes = NodeGenerator::new(&geometry);
        let connectivity = ConnectivityBuilder::new(&geometry);

        let transforms = match strategy {
            MeshStrategy::Skew => {
                let nox = match &config.custom_nox {
                    Some(nox) => nox.clone(),
                    None => linspace(0.0, config.span, config.num_trans_grid),
                };
                let layout = nodes.skew(&mut state, &nox);
                connectivity.skew(&mut state, &layout)?;
                vec![GeomTransform::Longitudinal, GeomTransform::Skew]
            }
            MeshStrategy::Orthogonal => {
                if config.custom_nox.is_some() {
                    warn!("custom span positions are ignored by the orthogonal strategy");
                }
                let layout = nodes.orthogonal(&mut state, config.num_trans_grid);
                connectivity.orthogonal(&mut state, &layout)?;
                vec![
                    GeomTransform::Longitudinal,
                    GeomTransform::Skew,
                    GeomTransform::Orthogonal,
                ]
            }
        };
        let transforms = transforms
            .into_iter()
            .map(|t| TransformDefinition::new(t, geometry.skew_vector))
            .collect();

        let (nodes, elements, supports) = state.into_parts();
        info!(
            "{} mesh generated: {} nodes, {} elements, {} supports",
            strategy,
            nodes.len(),
            elements.len(),
            supports.len()
        );

        Ok(Self {
            strategy,
            geometry,
            nodes,
            elements,
            supports,
            transforms,
            advisories,
        })
    }

    /// Strategy the mesh was generated with
    pub fn strategy(&self) -> MeshStrategy {
        self.strategy
    }

    /// Derived deck geometry
    pub fn geometry(&self) -> &DeckGeometry {
        &self.geometry
    }

    /// Station positions across the deck
    pub fn stations(&self) -> &[f64] {
        &self.geometry.stations
    }

    /// Nodes in tag order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in tag order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Supported nodes
    pub fn supports(&self) -> &[NodeSupport] {
        &self.supports
    }

    /// Geometric transformations used by the elements
    pub fn transforms(&self) -> &[TransformDefinition] {
        &self.transforms
    }

    /// Non-fatal density and spacing advisories raised for the configuration
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Node by tag
    pub fn node(&self, tag: usize) -> MeshResult<&Node> {
        tag.checked_sub(1)
            .and_then(|i| self.nodes.get(i))
            .ok_or(GrillageError::NodeNotFound(tag))
    }

    /// Elements of one member collection
    pub fn elements_in(&self, group: MemberGroup) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(move |e| e.group == group)
    }

    /// Elements carrying one section group
    pub fn elements_with_section(
        &self,
        section: SectionGroup,
    ) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(move |e| e.section == section)
    }

    /// Node closest to plan point (x, z)
    pub fn nearest_node(&self, x: f64, z: f64) -> Option<&Node> {
        self.nodes.iter().min_by(|a, b| {
            a.plan_distance_to(x, z)
                .total_cmp(&b.plan_distance_to(x, z))
        })
    }

    /// Natural coordinates of plan point `[x, z]` in the cell of four nodes
    ///
    /// Corner tags are counter-clockwise starting at natural (-1, -1).
    pub fn natural_coordinates(&self, point: [f64; 2], corners: [usize; 4]) -> MeshResult<[f64; 2]> {
        let mut plan = [[0.0; 2]; 4];
        for (slot, tag) in plan.iter_mut().zip(corners) {
            let node = self.node(tag)?;
            *slot = [node.x, node.z];
        }
        natural_coordinates(point[0], point[1], &plan)
    }

    /// Statistics of the mesh
    pub fn summary(&self) -> MeshSummary {
        MeshSummary::from_mesh(self)
    }
}
