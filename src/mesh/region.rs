//! Region row layouts and the mutable state of one generation pass

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::elements::{
    Element, GeomTransform, MemberGroup, Node, NodeSupport, SectionGroup, SupportEdge,
};
use crate::error::{GrillageError, MeshResult};

/// Partition of the deck plan a node or element was generated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// Whole deck of a skew (parallelogram) mesh
    Skew,
    /// Quadrilateral orthogonal region
    A,
    /// Triangular region at the end support
    B1,
    /// Triangular region at the start support
    B2,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::Skew => "skew",
            RegionKind::A => "A",
            RegionKind::B1 => "B1",
            RegionKind::B2 => "B2",
        };
        f.write_str(name)
    }
}

/// Contiguous run of node tags forming one row of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Station index the row lies on
    pub station: usize,
    /// Tag of the first node (unused when `len == 0`)
    pub start: usize,
    /// Number of nodes in the row
    pub len: usize,
}

/// Row-by-row node layout of a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLayout {
    /// Which region
    pub kind: RegionKind,
    /// Rows in generation order
    pub rows: Vec<RowSpan>,
}

impl RegionLayout {
    /// Create an empty layout
    pub fn new(kind: RegionKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, station: usize, start: usize, len: usize) {
        self.rows.push(RowSpan {
            station,
            start,
            len,
        });
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Total node count of the region
    pub fn num_nodes(&self) -> usize {
        self.rows.iter().map(|r| r.len).sum()
    }

    /// Row at `row`
    pub fn row(&self, row: usize) -> MeshResult<&RowSpan> {
        self.rows.get(row).ok_or_else(|| {
            self.inconsistency(row, 0, format!("row out of range ({} rows)", self.rows.len()))
        })
    }

    /// Length of row `row`, zero past the last row
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.len)
    }

    /// Node tag at (`row`, `column`), bounds-checked
    pub fn tag(&self, row: usize, column: usize) -> MeshResult<usize> {
        let span = self.row(row)?;
        if column >= span.len {
            return Err(self.inconsistency(
                row,
                column,
                format!("column out of range (row holds {} nodes)", span.len),
            ));
        }
        Ok(span.start + column)
    }

    /// Tag of the last node of `row`
    pub fn last_tag(&self, row: usize) -> MeshResult<usize> {
        let len = self.row(row)?.len;
        match len.checked_sub(1) {
            Some(column) => self.tag(row, column),
            None => Err(self.inconsistency(row, 0, "row is empty".to_string())),
        }
    }

    /// Check every row holds `expected(row)` nodes
    pub fn expect_row_lengths(&self, expected: impl Fn(usize) -> usize) -> MeshResult<()> {
        for (i, span) in self.rows.iter().enumerate() {
            let want = expected(i);
            if span.len != want {
                return Err(self.inconsistency(
                    i,
                    span.len,
                    format!("row holds {} nodes, expected {}", span.len, want),
                ));
            }
        }
        Ok(())
    }

    /// Build a [`GrillageError::MeshConsistency`] located in this region
    pub fn inconsistency(&self, row: usize, column: usize, detail: String) -> GrillageError {
        GrillageError::MeshConsistency {
            region: self.kind,
            row,
            column,
            detail,
        }
    }
}

/// Grid position used to locate consistency failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub region: RegionKind,
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(region: RegionKind, row: usize, column: usize) -> Self {
        Self {
            region,
            row,
            column,
        }
    }
}

/// Nodes, elements and supports accumulated by one generation pass
///
/// Tags are `index + 1`, so they are contiguous and insertion-ordered by
/// construction. A fresh state is created for every pass.
#[derive(Debug, Default)]
pub struct MeshState {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    supports: Vec<NodeSupport>,
}

impl MeshState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes so far
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements so far
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Tag the next node will receive
    pub fn next_node_tag(&self) -> usize {
        self.nodes.len() + 1
    }

    /// Nodes so far
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Add a node and return its tag
    pub fn add_node(&mut self, x: f64, y: f64, z: f64) -> usize {
        let tag = self.next_node_tag();
        self.nodes.push(Node::new(tag, x, y, z));
        tag
    }

    fn check_node(&self, tag: usize, at: Cell) -> MeshResult<()> {
        if tag == 0 || tag > self.nodes.len() {
            return Err(GrillageError::MeshConsistency {
                region: at.region,
                row: at.row,
                column: at.column,
                detail: format!("node {} does not exist ({} nodes)", tag, self.nodes.len()),
            });
        }
        Ok(())
    }

    /// Add an element between two existing nodes and return its tag
    pub fn add_element(
        &mut self,
        at: Cell,
        i_node: usize,
        j_node: usize,
        group: MemberGroup,
        section: SectionGroup,
        transform: GeomTransform,
    ) -> MeshResult<usize> {
        self.check_node(i_node, at)?;
        self.check_node(j_node, at)?;
        let tag = self.elements.len() + 1;
        self.elements
            .push(Element::new(tag, i_node, j_node, group, section, transform));
        Ok(tag)
    }

    /// Record an existing node as supported on `edge`
    pub fn add_support(&mut self, at: Cell, node: usize, edge: SupportEdge) -> MeshResult<()> {
        self.check_node(node, at)?;
        self.supports.push(NodeSupport::on_edge(node, edge));
        Ok(())
    }

    /// Consume the state
    pub fn into_parts(self) -> (Vec<Node>, Vec<Element>, Vec<NodeSupport>) {
        (self.nodes, self.elements, self.supports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tapered() -> RegionLayout {
        let mut layout = RegionLayout::new(RegionKind::B1);
        layout.push_row(0, 1, 3);
        layout.push_row(1, 4, 2);
        layout.push_row(2, 6, 1);
        layout
    }

    #[test]
    fn test_layout_tags() {
        let layout = tapered();
        assert_eq!(layout.num_nodes(), 6);
        assert_eq!(layout.tag(1, 1).unwrap(), 5);
        assert_eq!(layout.last_tag(0).unwrap(), 3);
        assert_eq!(layout.row_len(3), 0);
    }

    #[test]
    fn test_layout_out_of_range() {
        let layout = tapered();
        match layout.tag(2, 1) {
            Err(GrillageError::MeshConsistency {
                region, row, column, ..
            }) => {
                assert_eq!(region, RegionKind::B1);
                assert_eq!((row, column), (2, 1));
            }
            other => panic!("expected MeshConsistency, got {other:?}"),
        }
        assert!(layout.tag(5, 0).is_err());
    }

    #[test]
    fn test_layout_taper_check() {
        let layout = tapered();
        assert!(layout.expect_row_lengths(|r| 3 - r).is_ok());
        assert!(layout.expect_row_lengths(|_| 3).is_err());
    }

    #[test]
    fn test_state_rejects_dangling_element() {
        let mut state = MeshState::new();
        let a = state.add_node(0.0, 0.0, 0.0);
        let b = state.add_node(1.0, 0.0, 0.0);
        let at = Cell::new(RegionKind::A, 0, 0);
        let tag = state
            .add_element(
                at,
                a,
                b,
                MemberGroup::LongitudinalEdge1,
                SectionGroup::EdgeBeam,
                GeomTransform::Longitudinal,
            )
            .unwrap();
        assert_eq!(tag, 1);
        let err = state.add_element(
            at,
            b,
            3,
            MemberGroup::LongitudinalEdge1,
            SectionGroup::EdgeBeam,
            GeomTransform::Longitudinal,
        );
        assert!(matches!(err, Err(GrillageError::MeshConsistency { .. })));
        assert!(state.add_support(at, 0, SupportEdge::Start).is_err());
        assert_eq!(state.num_elements(), 1);
    }
}
