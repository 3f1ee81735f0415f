//! An owned, mutable adjacency copy of the caller's graph.
//!
//! Peeling and pruning are destructive; they run on a [WorkingGraph] deep-built
//! from the petgraph input, which is the unit of isolation : the input graph is
//! never mutated. Removal marks a vertex dead and detaches its incident edges;
//! neighbour iteration filters dead endpoints so degree(v) always equals the
//! number of live neighbours.

use std::collections::HashSet;

use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use crate::error::{DensestError, Result};

/// checks the graph contract : undirected, no self loop, no parallel edge.
/// Malformed graphs are rejected with [DensestError::MalformedGraph],
/// never silently accepted with a double-counted edge.
pub fn check_graph<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> Result<()>
where
    Ix: IndexType,
{
    let mut seen = HashSet::<(usize, usize)>::with_capacity(graph.edge_count());
    for edge in graph.edge_references() {
        let (u, v) = (edge.source().index(), edge.target().index());
        if u == v {
            return Err(DensestError::MalformedGraph(format!(
                "self loop on vertex {u}"
            )));
        }
        if !seen.insert((u.min(v), u.max(v))) {
            return Err(DensestError::MalformedGraph(format!(
                "parallel edge between vertices {u} and {v}"
            )));
        }
    }
    Ok(())
} // end of check_graph

/// mutable adjacency-list copy, exclusively owned by one algorithm invocation
pub(crate) struct WorkingGraph {
    adjacency: Vec<Vec<usize>>,
    degree: Vec<usize>,
    alive: Vec<bool>,
    nb_alive: usize,
    nb_edges: usize,
}

impl WorkingGraph {
    /// deep-builds a working copy from a (checked) petgraph graph
    pub(crate) fn from_graph<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> Self
    where
        Ix: IndexType,
    {
        let nb_nodes = graph.node_count();
        let mut adjacency: Vec<Vec<usize>> = (0..nb_nodes).map(|_| Vec::new()).collect();
        for edge in graph.edge_references() {
            let (u, v) = (edge.source().index(), edge.target().index());
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        let degree: Vec<usize> = adjacency.iter().map(|l| l.len()).collect();
        WorkingGraph {
            adjacency,
            degree,
            alive: vec![true; nb_nodes],
            nb_alive: nb_nodes,
            nb_edges: graph.edge_count(),
        }
    } // end of from_graph

    pub(crate) fn get_nb_nodes(&self) -> usize {
        self.alive.len()
    }

    /// number of live vertices
    pub(crate) fn get_nb_alive(&self) -> usize {
        self.nb_alive
    }

    /// number of edges between live vertices
    pub(crate) fn get_nb_edges(&self) -> usize {
        self.nb_edges
    }

    pub(crate) fn is_alive(&self, v: usize) -> bool {
        self.alive[v]
    }

    /// current degree of a live vertex
    pub(crate) fn get_degree(&self, v: usize) -> usize {
        self.degree[v]
    }

    /// current degrees of all vertices (dead vertices report 0)
    pub(crate) fn get_degrees(&self) -> Vec<usize> {
        self.degree.clone()
    }

    /// removes a live vertex : detaches all incident edges, leaving the vertex
    /// isolated and dead. Returns the live former neighbours so the caller can
    /// rebucket them.
    pub(crate) fn remove_vertex(&mut self, v: usize) -> Vec<usize> {
        debug_assert!(self.alive[v]);
        let touched: Vec<usize> = self.adjacency[v]
            .iter()
            .copied()
            .filter(|&u| self.alive[u])
            .collect();
        for &u in &touched {
            self.degree[u] -= 1;
        }
        self.nb_edges -= touched.len();
        self.degree[v] = 0;
        self.alive[v] = false;
        self.nb_alive -= 1;
        touched
    } // end of remove_vertex
} // end of impl WorkingGraph

//==========================================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn check_rejects_self_loop() {
        log_init_test();
        let mut graph = Graph::<u32, f64, Undirected>::new_undirected();
        let a = graph.add_node(0);
        graph.add_edge(a, a, 1.);
        assert!(matches!(
            check_graph(&graph),
            Err(DensestError::MalformedGraph(_))
        ));
    }

    #[test]
    fn check_rejects_parallel_edge() {
        log_init_test();
        let mut graph = Graph::<u32, f64, Undirected>::new_undirected();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        graph.add_edge(a, b, 1.);
        graph.add_edge(b, a, 1.);
        assert!(matches!(
            check_graph(&graph),
            Err(DensestError::MalformedGraph(_))
        ));
    }

    #[test]
    fn removal_keeps_invariants() {
        log_init_test();
        // triangle plus a pendant on vertex 2
        let mut graph = Graph::<u32, f64, Undirected>::new_undirected();
        let nodes: Vec<_> = (0..4u32).map(|i| graph.add_node(i)).collect();
        graph.add_edge(nodes[0], nodes[1], 1.);
        graph.add_edge(nodes[1], nodes[2], 1.);
        graph.add_edge(nodes[0], nodes[2], 1.);
        graph.add_edge(nodes[2], nodes[3], 1.);
        check_graph(&graph).unwrap();
        //
        let mut working = WorkingGraph::from_graph(&graph);
        assert_eq!(working.get_nb_edges(), 4);
        assert_eq!(working.get_degree(2), 3);
        let touched = working.remove_vertex(2);
        assert_eq!(touched.len(), 3);
        assert_eq!(working.get_nb_edges(), 1);
        assert_eq!(working.get_nb_alive(), 3);
        assert_eq!(working.get_degree(3), 0);
        assert!(!working.is_alive(2));
        // input graph untouched
        assert_eq!(graph.edge_count(), 4);
    } // end of removal_keeps_invariants
} // end of mod tests
