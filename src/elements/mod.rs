//! Grillage value types: nodes, members and their properties

mod element;
mod group;
mod material;
mod node;
mod section;
mod support;
mod transform;

pub use element::Element;
pub use group::{MemberGroup, SectionGroup};
pub use material::Material;
pub use node::Node;
pub use section::{BeamElementType, MemberSection};
pub use support::{NodeSupport, Support, SupportEdge};
pub use transform::{GeomTransform, TransformDefinition};
