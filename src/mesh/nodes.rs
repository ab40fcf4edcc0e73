//! Node generation for both meshing strategies
//!
//! Skew strategy: one row per station, each row a copy of the span
//! positions sheared by `-z * tan(skew)`.
//!
//! Orthogonal strategy: the deck is cut into
//!
//! ```text
//!        B2        A           B1
//!          o o o o o o o o o o o
//!        o o o o o o o o o o o
//!      o o o o o o o o o o o
//! ```
//!
//! a quadrilateral region A with an orthogonal grid and two triangular
//! regions that absorb the skew at each support line. Rows of the triangles
//! shrink by one node per station.

use log::debug;

use crate::config::DeckGeometry;
use crate::math::linspace;

use super::region::{MeshState, RegionKind, RegionLayout};

/// Row layouts of the three regions of an orthogonal mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthogonalLayout {
    pub a: RegionLayout,
    pub b1: RegionLayout,
    pub b2: RegionLayout,
    /// Station indices ordered by distance from the acute corner line
    pub order: Vec<usize>,
}

/// Produces node coordinates in tag order
#[derive(Debug, Clone, Copy)]
pub struct NodeGenerator<'a> {
    geometry: &'a DeckGeometry,
}

impl<'a> NodeGenerator<'a> {
    pub fn new(geometry: &'a DeckGeometry) -> Self {
        Self { geometry }
    }

    /// Span positions of the row at `station` in a skew mesh
    pub fn skew_row(&self, nox: &[f64], station: usize) -> Vec<f64> {
        let z = self.geometry.stations[station];
        nox.iter().map(|x| x - z * self.geometry.tan_skew).collect()
    }

    /// Generate the sheared parallelogram mesh, row-major by station
    pub fn skew(&self, state: &mut MeshState, nox: &[f64]) -> RegionLayout {
        let mut layout = RegionLayout::new(RegionKind::Skew);
        for (station, &z) in self.geometry.stations.iter().enumerate() {
            let start = state.next_node_tag();
            for x in self.skew_row(nox, station) {
                state.add_node(x, self.geometry.y, z);
            }
            layout.push_row(station, start, nox.len());
        }
        debug!(
            "skew region: {} rows x {} columns",
            layout.num_rows(),
            nox.len()
        );
        layout
    }

    /// Station indices sorted by increasing distance from the acute corner
    pub fn station_order(&self) -> Vec<usize> {
        let n = self.geometry.num_stations();
        if self.geometry.skew >= 0.0 {
            (0..n).collect()
        } else {
            (0..n).rev().collect()
        }
    }

    /// Span positions of region A, including the position shared with B1
    pub fn region_a_positions(&self, num_trans_grid: usize) -> Vec<f64> {
        linspace(
            0.0,
            self.geometry.span - self.geometry.breadth.abs(),
            num_trans_grid,
        )
    }

    /// Span positions of the longest region B1 row
    ///
    /// Starts at `reg_a_end`, then steps along the end support line station
    /// by station and finishes at the span. Holds exactly one value per
    /// station.
    pub fn get_region_b(&self, reg_a_end: f64) -> Vec<f64> {
        let order = self.station_order();
        let n = order.len();
        let t = self.geometry.tan_skew.abs();

        let mut reg_b = Vec::with_capacity(n);
        reg_b.push(reg_a_end);
        for &station in order.iter().take(n.saturating_sub(1)).skip(1).rev() {
            reg_b.push(self.geometry.span - self.geometry.corner_distance(station) * t);
        }
        reg_b.push(self.geometry.span);
        reg_b
    }

    /// Generate regions A, B1 and B2 in that order
    pub fn orthogonal(&self, state: &mut MeshState, num_trans_grid: usize) -> OrthogonalLayout {
        let geometry = self.geometry;
        let order = self.station_order();
        let n = order.len();
        let t = geometry.tan_skew.abs();

        let reg_a = self.region_a_positions(num_trans_grid);
        let (reg_a_end, reg_a_nodes) = match reg_a.split_last() {
            Some((last, rest)) => (*last, rest),
            None => (0.0, &reg_a[..]),
        };

        let mut a = RegionLayout::new(RegionKind::A);
        for (station, &z) in geometry.stations.iter().enumerate() {
            let start = state.next_node_tag();
            for &x in reg_a_nodes {
                state.add_node(x, geometry.y, z);
            }
            a.push_row(station, start, reg_a_nodes.len());
        }
        debug!(
            "region A: {} rows x {} columns, ends at x = {:.4}",
            a.num_rows(),
            reg_a_nodes.len(),
            reg_a_end
        );

        let reg_b = self.get_region_b(reg_a_end);
        let mut b1 = RegionLayout::new(RegionKind::B1);
        for (q, &station) in order.iter().enumerate() {
            let z = geometry.stations[station];
            let start = state.next_node_tag();
            for &x in &reg_b[..n - q] {
                state.add_node(x, geometry.y, z);
            }
            b1.push_row(station, start, n - q);
        }
        debug!("region B1: {} nodes", b1.num_nodes());

        let mut b2 = RegionLayout::new(RegionKind::B2);
        for s in 0..n {
            let station = order[n - 1 - s];
            let z = geometry.stations[station];
            let start = state.next_node_tag();
            for &corner in &order[1..n - s] {
                let x = -geometry.corner_distance(corner) * t;
                state.add_node(x, geometry.y, z);
            }
            b2.push_row(station, start, n - 1 - s);
        }
        debug!("region B2: {} nodes", b2.num_nodes());

        OrthogonalLayout { a, b1, b2, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshConfig;
    use approx::assert_relative_eq;

    fn geometry(skew: f64) -> DeckGeometry {
        DeckGeometry::derive(&MeshConfig::new(10.0, 7.0, skew, 7, 5, 1.0))
    }

    #[test]
    fn test_get_region_b_length_and_ends() {
        let geom = geometry(42.0);
        let gen = NodeGenerator::new(&geom);
        let reg_a = gen.region_a_positions(5);
        let reg_b = gen.get_region_b(*reg_a.last().unwrap());
        assert_eq!(reg_b.len(), geom.num_stations());
        assert_eq!(reg_b[0], reg_a[4]);
        assert_eq!(*reg_b.last().unwrap(), 10.0);
        let t = 42.0_f64.to_radians().tan();
        assert_relative_eq!(reg_b[1], 10.0 - geom.stations[7] * t, epsilon = 1e-12);
        assert!(reg_b.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_get_region_b_two_stations() {
        let geom = DeckGeometry::derive(&MeshConfig::new(10.0, 4.0, 20.0, 0, 4, 0.0));
        let gen = NodeGenerator::new(&geom);
        assert_eq!(gen.get_region_b(8.5), vec![8.5, 10.0]);
    }

    #[test]
    fn test_orthogonal_row_counts() {
        let geom = geometry(42.0);
        let mut state = MeshState::new();
        let layout = NodeGenerator::new(&geom).orthogonal(&mut state, 5);
        assert_eq!(layout.a.num_nodes(), 36);
        assert_eq!(layout.b1.num_nodes(), 45);
        assert_eq!(layout.b2.num_nodes(), 36);
        assert_eq!(state.num_nodes(), 117);
        assert_eq!(layout.b2.rows.last().map(|r| r.len), Some(0));
    }

    #[test]
    fn test_negative_skew_mirrors_station_order() {
        let geom = geometry(-42.0);
        let gen = NodeGenerator::new(&geom);
        assert_eq!(gen.station_order(), (0..9).rev().collect::<Vec<_>>());

        let mut state = MeshState::new();
        let layout = gen.orthogonal(&mut state, 5);
        // longest B1 row sits on the z = width edge
        let first = layout.b1.rows[0];
        assert_eq!(first.station, 8);
        let last_node = state.nodes()[first.start + first.len - 2];
        assert_relative_eq!(last_node.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(last_node.z, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skew_rows_are_sheared() {
        let geom = DeckGeometry::derive(&MeshConfig::new(24.6, 10.175, 20.0, 5, 7, 2.0));
        let gen = NodeGenerator::new(&geom);
        let nox = linspace(0.0, 24.6, 7);
        let row = gen.skew_row(&nox, 6);
        let shift = 10.175 * 20.0_f64.to_radians().tan();
        assert_relative_eq!(row[0], -shift, epsilon = 1e-12);
        assert_relative_eq!(row[6], 24.6 - shift, epsilon = 1e-12);
    }
}
