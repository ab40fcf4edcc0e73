//! Grillage Mesh - parametric beam-and-slab meshes of skewed bridge decks
//!
//! Given span, width, skew angle, girder layout and mesh density, this
//! library produces the nodes, members, member groups, supports and local
//! axis transformations of a grillage model:
//! - Skew meshes: a single sheared grid following the support lines
//! - Orthogonal meshes: an orthogonal region plus two triangular skew
//!   regions at the supports
//! - Section groups (1-6) for assigning member properties
//! - OpenSees script output of a finished mesh
//!
//! ## Example
//! ```rust
//! use grillage_mesh::prelude::*;
//!
//! let config = MeshConfig::new(10.0, 7.0, 42.0, 7, 5, 1.0)
//!     .with_strategy(MeshStrategy::Orthogonal);
//! let mesh = GrillageMesh::generate(&config).unwrap();
//!
//! assert_eq!(mesh.nodes().len(), 117);
//! for element in mesh.elements_in(MemberGroup::TransverseEdge2) {
//!     let (i, j) = element.nodes();
//!     assert!(mesh.node(i).unwrap().z < mesh.node(j).unwrap().z);
//! }
//!
//! let assignments = SectionAssignments::new();
//! let script = OpenSeesScript::new(&mesh, &assignments).render().unwrap();
//! assert!(script.starts_with("# Grillage model"));
//! ```

pub mod config;
pub mod elements;
pub mod error;
pub mod math;
pub mod mesh;
pub mod results;
pub mod rules;
pub mod script;

// Re-export common types
pub mod prelude {
    pub use crate::config::{DeckGeometry, MeshConfig, MeshStrategy};
    pub use crate::elements::{
        BeamElementType, Element, GeomTransform, Material, MemberGroup, MemberSection, Node,
        NodeSupport, SectionGroup, Support, SupportEdge, TransformDefinition,
    };
    pub use crate::error::{GrillageError, MeshResult};
    pub use crate::mesh::{GrillageMesh, MeshPartitioner};
    pub use crate::results::MeshSummary;
    pub use crate::rules::{Advisory, GeometryRules, GridDirection};
    pub use crate::script::{MemberProperties, OpenSeesScript, ProjectFile, SectionAssignments};
}
