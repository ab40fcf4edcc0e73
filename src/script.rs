//! OpenSees command script for a generated mesh
//!
//! Formatting is kept apart from generation: [`OpenSeesScript`] only reads a
//! finished [`GrillageMesh`] and the section properties assigned to each
//! [`SectionGroup`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::MeshConfig;
use crate::elements::{BeamElementType, Material, MemberGroup, MemberSection, SectionGroup};
use crate::error::{GrillageError, MeshResult};
use crate::mesh::GrillageMesh;

/// Section and material of one section group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProperties {
    pub section: MemberSection,
    pub material: Material,
}

impl MemberProperties {
    pub fn new(section: MemberSection, material: Material) -> Self {
        Self { section, material }
    }

    /// Element arguments in solver order
    ///
    /// `elasticBeamColumn`: A E G J Iy Iz.
    /// `ElasticTimoshenkoBeam`: E G A J Iy Iz Ay Az.
    pub fn element_args(&self) -> Vec<f64> {
        let s = &self.section;
        let m = &self.material;
        match s.element_type {
            BeamElementType::ElasticBeamColumn => vec![s.a, m.e, m.g, s.j, s.iy, s.iz],
            BeamElementType::ElasticTimoshenkoBeam => {
                let (ay, az) = s.shear_areas();
                vec![m.e, m.g, s.a, s.j, s.iy, s.iz, ay, az]
            }
        }
    }

    fn check(&self, group: SectionGroup) -> MeshResult<()> {
        if !self.section.is_valid() || self.material.e <= 0.0 || self.material.g <= 0.0 {
            return Err(GrillageError::InvalidInput(format!(
                "section group {} has non-positive properties",
                group
            )));
        }
        Ok(())
    }
}

/// Explicit mapping from section group to member properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionAssignments(BTreeMap<SectionGroup, MemberProperties>);

impl SectionAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign properties to a group, replacing any earlier assignment
    pub fn assign(&mut self, group: SectionGroup, properties: MemberProperties) {
        self.0.insert(group, properties);
    }

    /// Builder form of [`SectionAssignments::assign`]
    pub fn with(mut self, group: SectionGroup, properties: MemberProperties) -> Self {
        self.assign(group, properties);
        self
    }

    pub fn get(&self, group: SectionGroup) -> Option<&MemberProperties> {
        self.0.get(&group)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Input of the command line tool and the script endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Model name used in the script header
    #[serde(default)]
    pub name: Option<String>,
    /// Mesh configuration
    pub mesh: MeshConfig,
    /// Section properties per group
    #[serde(default)]
    pub sections: SectionAssignments,
}

impl ProjectFile {
    /// Load a project from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> MeshResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Renders a mesh as an OpenSees-py script
#[derive(Debug, Clone)]
pub struct OpenSeesScript<'a> {
    mesh: &'a GrillageMesh,
    assignments: &'a SectionAssignments,
    name: String,
    strict: bool,
}

impl<'a> OpenSeesScript<'a> {
    pub fn new(mesh: &'a GrillageMesh, assignments: &'a SectionAssignments) -> Self {
        Self {
            mesh,
            assignments,
            name: "grillage".to_string(),
            strict: false,
        }
    }

    /// Set the model name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Fail on section groups without properties instead of skipping them
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Render the full script
    pub fn render(&self) -> MeshResult<String> {
        let mesh = self.mesh;
        let mut out = String::new();

        out.push_str(&format!("# Grillage model: {}\n", self.name));
        out.push_str(&format!(
            "# {} mesh, {} nodes, {} elements\n",
            mesh.strategy(),
            mesh.nodes().len(),
            mesh.elements().len()
        ));
        out.push_str("import openseespy.opensees as ops\n\n");
        out.push_str("ops.wipe()\n");
        out.push_str("ops.model('basic', '-ndm', 3, '-ndf', 6)\n");

        out.push_str("# Node generation procedure\n");
        for node in mesh.nodes() {
            out.push_str(&format!(
                "ops.node({}, {}, {}, {})\n",
                node.tag, node.x, node.y, node.z
            ));
        }

        out.push_str("# Boundary condition implementation\n");
        for support in mesh.supports() {
            let [dx, dy, dz, rx, ry, rz] = support.support.fixity();
            out.push_str(&format!(
                "ops.fix({}, *[{}, {}, {}, {}, {}, {}])\n",
                support.node, dx, dy, dz, rx, ry, rz
            ));
        }

        for transform in mesh.transforms() {
            let [vx, vy, vz] = transform.vector_xz;
            out.push_str(&format!("# create transformation {}\n", transform.transform.tag()));
            out.push_str(&format!(
                "ops.geomTransf(\"Linear\", {}, *[{}, {}, {}])\n",
                transform.transform.tag(),
                vx,
                vy,
                vz
            ));
        }

        let mut missing = BTreeSet::new();
        for group in MemberGroup::ALL {
            let mut elements = mesh.elements_in(group).peekable();
            if elements.peek().is_none() {
                continue;
            }
            out.push_str(&format!("# Element generation for section: {}\n", group));
            for element in elements {
                let Some(properties) = self.assignments.get(element.section) else {
                    if self.strict {
                        return Err(GrillageError::InvalidInput(format!(
                            "no member properties assigned to section group {}",
                            element.section
                        )));
                    }
                    missing.insert(element.section);
                    continue;
                };
                properties.check(element.section)?;
                let args = properties
                    .element_args()
                    .iter()
                    .map(|v| format!("{:e}", v))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "ops.element(\"{}\", {}, *[{}, {}], *[{}], {})\n",
                    properties.section.element_type.name(),
                    element.tag,
                    element.i_node,
                    element.j_node,
                    args,
                    element.transform.tag()
                ));
            }
        }

        for section in missing {
            warn!(
                "section group {} has no member properties; its elements were skipped",
                section
            );
        }
        Ok(out)
    }

    /// Render and write the script to a file
    pub fn write_to(&self, path: impl AsRef<Path>) -> MeshResult<()> {
        std::fs::write(path, self.render()?)?;
        Ok(())
    }
}
