//! Element connectivity from row/column index arithmetic
//!
//! Every lookup goes through [`RegionLayout::tag`], so an inconsistent
//! layout surfaces as [`crate::error::GrillageError::MeshConsistency`]
//! instead of a wrapped index.
//!
//! Longitudinal members point towards increasing x, transverse and support
//! members towards increasing z.

use log::debug;

use crate::config::DeckGeometry;
use crate::elements::{GeomTransform, MemberGroup, SectionGroup, SupportEdge};
use crate::error::MeshResult;

use super::nodes::OrthogonalLayout;
use super::region::{Cell, MeshState, RegionKind, RegionLayout};

/// Derives elements and supports from generated row layouts
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityBuilder<'a> {
    geometry: &'a DeckGeometry,
}

impl<'a> ConnectivityBuilder<'a> {
    pub fn new(geometry: &'a DeckGeometry) -> Self {
        Self { geometry }
    }

    /// Group and section of a longitudinal member on `station`
    pub fn longitudinal_group(&self, station: usize) -> (MemberGroup, SectionGroup) {
        let last = self.geometry.num_stations().saturating_sub(1);
        if station == 0 {
            (MemberGroup::LongitudinalEdge1, SectionGroup::EdgeBeam)
        } else if station == last {
            (MemberGroup::LongitudinalEdge2, SectionGroup::EdgeBeam)
        } else {
            (MemberGroup::LongitudinalInterior, SectionGroup::Longitudinal)
        }
    }

    /// Group and section of a grid transverse member in `column` of `columns`
    pub fn transverse_group(column: usize, columns: usize) -> (MemberGroup, SectionGroup) {
        if column == 0 {
            (MemberGroup::TransverseEdge1, SectionGroup::EdgeSlab)
        } else if column + 1 == columns {
            (MemberGroup::TransverseEdge2, SectionGroup::EdgeSlab)
        } else {
            (MemberGroup::TransverseInterior, SectionGroup::Slab)
        }
    }

    /// Connect a skew mesh and record its support lines
    pub fn skew(&self, state: &mut MeshState, layout: &RegionLayout) -> MeshResult<()> {
        let columns = layout.row_len(0);
        layout.expect_row_lengths(|_| columns)?;
        self.grid(state, layout, GeomTransform::Skew)?;

        for r in 0..layout.num_rows() {
            state.add_support(Cell::new(layout.kind, r, 0), layout.tag(r, 0)?, SupportEdge::Start)?;
            state.add_support(
                Cell::new(layout.kind, r, columns.saturating_sub(1)),
                layout.last_tag(r)?,
                SupportEdge::End,
            )?;
        }
        debug!("skew region: {} elements", state.num_elements());
        Ok(())
    }

    /// Connect regions A, B1 and B2 of an orthogonal mesh
    pub fn orthogonal(&self, state: &mut MeshState, layout: &OrthogonalLayout) -> MeshResult<()> {
        let n = layout.order.len();
        self.check_taper(layout)?;

        self.grid(state, &layout.a, GeomTransform::Orthogonal)?;
        debug!("region A: {} elements", state.num_elements());
        let before = state.num_elements();
        self.region_b1(state, layout)?;
        debug!("region B1: {} elements", state.num_elements() - before);
        let before = state.num_elements();
        self.region_b2(state, layout)?;
        debug!("region B2: {} elements", state.num_elements() - before);

        let (b1, b2) = (&layout.b1, &layout.b2);
        for s in 0..n {
            if b2.row_len(s) > 0 {
                let column = b2.row_len(s) - 1;
                state.add_support(Cell::new(b2.kind, s, column), b2.last_tag(s)?, SupportEdge::Start)?;
            }
        }
        let corner = layout.order[0];
        state.add_support(
            Cell::new(RegionKind::A, corner, 0),
            layout.a.tag(corner, 0)?,
            SupportEdge::Start,
        )?;
        for q in 0..n {
            let column = b1.row_len(q).saturating_sub(1);
            state.add_support(Cell::new(b1.kind, q, column), b1.last_tag(q)?, SupportEdge::End)?;
        }
        Ok(())
    }

    /// Check the row counts of every region against the expected taper
    fn check_taper(&self, layout: &OrthogonalLayout) -> MeshResult<()> {
        let n = layout.order.len();
        for region in [&layout.a, &layout.b1, &layout.b2] {
            if region.num_rows() != n {
                return Err(region.inconsistency(
                    region.num_rows(),
                    0,
                    format!("{} rows, expected one per station ({})", region.num_rows(), n),
                ));
            }
        }
        let columns = layout.a.row_len(0);
        layout.a.expect_row_lengths(|_| columns)?;
        layout.b1.expect_row_lengths(|q| n - q)?;
        layout.b2.expect_row_lengths(|s| n - 1 - s)?;
        Ok(())
    }

    /// Rectangular grid: per row and column a longitudinal then a transverse member
    fn grid(
        &self,
        state: &mut MeshState,
        layout: &RegionLayout,
        transverse: GeomTransform,
    ) -> MeshResult<()> {
        let rows = layout.num_rows();
        for r in 0..rows {
            let span = *layout.row(r)?;
            let (long_group, long_section) = self.longitudinal_group(span.station);
            for c in 0..span.len {
                let at = Cell::new(layout.kind, r, c);
                if c + 1 < span.len {
                    state.add_element(
                        at,
                        layout.tag(r, c)?,
                        layout.tag(r, c + 1)?,
                        long_group,
                        long_section,
                        GeomTransform::Longitudinal,
                    )?;
                }
                if r + 1 < rows {
                    let (group, section) = Self::transverse_group(c, span.len);
                    state.add_element(
                        at,
                        layout.tag(r, c)?,
                        layout.tag(r + 1, c)?,
                        group,
                        section,
                        transverse,
                    )?;
                }
            }
        }
        Ok(())
    }

    /// End-support triangle: stitch to A, longitudinal run, transverse slab, support edge
    fn region_b1(&self, state: &mut MeshState, layout: &OrthogonalLayout) -> MeshResult<()> {
        let (a, b1) = (&layout.a, &layout.b1);
        let n = b1.num_rows();
        for q in 0..n {
            let span = *b1.row(q)?;
            let (long_group, long_section) = self.longitudinal_group(span.station);

            state.add_element(
                Cell::new(b1.kind, q, 0),
                a.last_tag(span.station)?,
                b1.tag(q, 0)?,
                long_group,
                long_section,
                GeomTransform::Longitudinal,
            )?;
            for k in 0..span.len.saturating_sub(1) {
                state.add_element(
                    Cell::new(b1.kind, q, k),
                    b1.tag(q, k)?,
                    b1.tag(q, k + 1)?,
                    long_group,
                    long_section,
                    GeomTransform::Longitudinal,
                )?;
            }

            if q + 1 == n {
                continue;
            }
            let next = *b1.row(q + 1)?;
            for k in 0..next.len {
                let (i, j) = toward_z(
                    (span.station, b1.tag(q, k)?),
                    (next.station, b1.tag(q + 1, k)?),
                );
                state.add_element(
                    Cell::new(b1.kind, q, k),
                    i,
                    j,
                    MemberGroup::TransverseInterior,
                    SectionGroup::SkewSlab,
                    GeomTransform::Orthogonal,
                )?;
            }
            let (i, j) = toward_z(
                (span.station, b1.last_tag(q)?),
                (next.station, b1.last_tag(q + 1)?),
            );
            state.add_element(
                Cell::new(b1.kind, q, span.len - 1),
                i,
                j,
                MemberGroup::TransverseEdge2,
                SectionGroup::SkewEdge,
                GeomTransform::Skew,
            )?;
        }
        Ok(())
    }

    /// Start-support triangle, closing on the corner node of region A
    fn region_b2(&self, state: &mut MeshState, layout: &OrthogonalLayout) -> MeshResult<()> {
        let (a, b2) = (&layout.a, &layout.b2);
        let n = b2.num_rows();
        for s in 0..n {
            let span = *b2.row(s)?;
            if span.len == 0 {
                continue;
            }
            let (long_group, long_section) = self.longitudinal_group(span.station);

            state.add_element(
                Cell::new(b2.kind, s, 0),
                b2.tag(s, 0)?,
                a.tag(span.station, 0)?,
                long_group,
                long_section,
                GeomTransform::Longitudinal,
            )?;
            // positions decrease along the row
            for k in 0..span.len - 1 {
                state.add_element(
                    Cell::new(b2.kind, s, k),
                    b2.tag(s, k + 1)?,
                    b2.tag(s, k)?,
                    long_group,
                    long_section,
                    GeomTransform::Longitudinal,
                )?;
            }

            let next = *b2.row(s + 1)?;
            for k in 0..next.len {
                let (i, j) = toward_z(
                    (span.station, b2.tag(s, k)?),
                    (next.station, b2.tag(s + 1, k)?),
                );
                state.add_element(
                    Cell::new(b2.kind, s, k),
                    i,
                    j,
                    MemberGroup::TransverseInterior,
                    SectionGroup::SkewSlab,
                    GeomTransform::Orthogonal,
                )?;
            }
            let closing = if next.len > 0 {
                b2.last_tag(s + 1)?
            } else {
                a.tag(next.station, 0)?
            };
            let (i, j) = toward_z((span.station, b2.last_tag(s)?), (next.station, closing));
            state.add_element(
                Cell::new(b2.kind, s, span.len - 1),
                i,
                j,
                MemberGroup::TransverseEdge1,
                SectionGroup::SkewEdge,
                GeomTransform::Skew,
            )?;
        }
        Ok(())
    }
}

/// Order two (station, tag) ends so the member runs towards increasing z
fn toward_z(first: (usize, usize), second: (usize, usize)) -> (usize, usize) {
    if first.0 <= second.0 {
        (first.1, second.1)
    } else {
        (second.1, first.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshConfig;
    use crate::error::GrillageError;
    use crate::mesh::nodes::NodeGenerator;

    fn ortho_geometry() -> DeckGeometry {
        DeckGeometry::derive(&MeshConfig::new(10.0, 7.0, 42.0, 7, 5, 1.0))
    }

    #[test]
    fn test_transverse_group_edges() {
        assert_eq!(
            ConnectivityBuilder::transverse_group(0, 5).0,
            MemberGroup::TransverseEdge1
        );
        assert_eq!(
            ConnectivityBuilder::transverse_group(4, 5),
            (MemberGroup::TransverseEdge2, SectionGroup::EdgeSlab)
        );
        assert_eq!(
            ConnectivityBuilder::transverse_group(2, 5).1,
            SectionGroup::Slab
        );
    }

    #[test]
    fn test_orthogonal_element_counts() {
        let geom = ortho_geometry();
        let mut state = MeshState::new();
        let layout = NodeGenerator::new(&geom).orthogonal(&mut state, 5);
        ConnectivityBuilder::new(&geom)
            .orthogonal(&mut state, &layout)
            .unwrap();
        let (n, a) = (9, 4);
        let expected = n * (a - 1)
            + (n - 1) * a
            + n
            + n * (n - 1)
            + (n - 1)
            + (n - 1)
            + (n - 1) * (n - 2)
            + (n - 1);
        assert_eq!(state.num_elements(), expected);
    }

    #[test]
    fn test_inconsistent_taper_is_reported() {
        let geom = ortho_geometry();
        let mut state = MeshState::new();
        let mut layout = NodeGenerator::new(&geom).orthogonal(&mut state, 5);
        // B1 row 3 claims one node too many
        layout.b1.rows[3].len += 1;
        let result = ConnectivityBuilder::new(&geom).orthogonal(&mut state, &layout);
        match result {
            Err(GrillageError::MeshConsistency { region, row, .. }) => {
                assert_eq!(region, RegionKind::B1);
                assert_eq!(row, 3);
            }
            other => panic!("expected MeshConsistency, got {other:?}"),
        }
    }

    #[test]
    fn test_layout_past_node_collection_is_reported() {
        let geom = DeckGeometry::derive(&MeshConfig::new(10.0, 4.0, 0.0, 2, 3, 1.0));
        let mut state = MeshState::new();
        let mut layout = RegionLayout::new(RegionKind::Skew);
        let start = state.next_node_tag();
        for _ in 0..3 {
            state.add_node(0.0, 0.0, 0.0);
        }
        layout.push_row(0, start, 3);
        // rows that claim nodes never generated
        for station in 1..4 {
            layout.push_row(station, start + 3 * station, 3);
        }
        let result = ConnectivityBuilder::new(&geom).skew(&mut state, &layout);
        assert!(matches!(
            result,
            Err(GrillageError::MeshConsistency {
                region: RegionKind::Skew,
                ..
            })
        ));
    }

    #[test]
    fn test_toward_z() {
        assert_eq!(toward_z((2, 10), (3, 20)), (10, 20));
        assert_eq!(toward_z((5, 10), (4, 20)), (20, 10));
    }
}
