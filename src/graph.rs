//! The corridor topology of a grid as a graph.

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cartesian2DCoordinate, MoveDirection};
use crate::grid::Grid;
use crate::utils;

/// Nodes are the open corridor cells (odd-odd coordinates), edges the carved walls joining
/// two of them. Nodes are added in row major order.
pub fn corridor_graph(grid: &Grid) -> UnGraph<Cartesian2DCoordinate, ()> {
    let corridors: Vec<Cartesian2DCoordinate> = grid.iter_corridor_cells()
        .filter(|coord| grid.is_open(*coord))
        .collect();

    let mut graph = UnGraph::with_capacity(corridors.len(), corridors.len());
    let mut node_indices = utils::fnv_hashmap::<Cartesian2DCoordinate, NodeIndex>(corridors.len());
    for coord in &corridors {
        node_indices.insert(*coord, graph.add_node(*coord));
    }

    // Only look right and up so each passage is seen once.
    for coord in &corridors {
        for direction in &[MoveDirection::Right, MoveDirection::Up] {
            let (dx, dy) = direction.grid_offset();
            let wall_open = grid.is_neighbour_open(*coord, *direction);
            let far_side = coord.offset(2 * dx, 2 * dy).and_then(|c| node_indices.get(&c));

            if let (true, Some(&far_index)) = (wall_open, far_side) {
                graph.add_edge(node_indices[coord], far_index, ());
            }
        }
    }

    graph
}

/// Serialize the maze as text: line 1 is `n m` (vertex and edge counts), each further line
/// is an edge between two vertices given as 1-based indices.
pub fn edge_list(grid: &Grid) -> String {
    let graph = corridor_graph(grid);

    let header = format!("{} {}\n", graph.node_count(), graph.edge_count());
    let edges = graph.raw_edges()
        .iter()
        .map(|edge| {
            let src_as_1_based_index = edge.source().index() + 1;
            let dst_as_1_based_index = edge.target().index() + 1;
            format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index)
        })
        .join("");

    header + &edges
}
