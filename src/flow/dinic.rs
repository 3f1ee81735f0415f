//! Dinic's max-flow algorithm on f64 capacities.
//!
//! Level graph construction by breadth-first search, then blocking flow by
//! depth-first search with per-node arc cursors. The number of phases is at
//! most the number of nodes, which gives the solver a hard convergence bound.

use log::*;

use super::{FlowArc, FlowNetwork, MinCut, MinCutSolver, FLOW_EPSILON};
use crate::error::{DensestError, Result};

/// The default [MinCutSolver]. Stateless, the network is cloned into a private
/// residual state at each call.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dinic;

impl MinCutSolver for Dinic {
    fn min_cut(&self, network: &FlowNetwork, source: usize, sink: usize) -> Result<MinCut> {
        let nb_nodes = network.get_nb_nodes();
        if source >= nb_nodes || sink >= nb_nodes || source == sink {
            return Err(DensestError::InvalidArgument(format!(
                "bad source/sink pair ({source}, {sink}) for a network on {nb_nodes} nodes"
            )));
        }
        let mut residual = Residual::new(network);
        let value = residual.max_flow(source, sink)?;
        let source_side = residual.residual_reachable(source);
        trace!(
            "dinic min_cut : value {:.3e}, source side size {}",
            value,
            source_side.len()
        );
        Ok(MinCut { source_side, value })
    } // end of min_cut
} // end of impl MinCutSolver

/// residual network state owned by one max_flow call
struct Residual {
    adjacency: Vec<Vec<usize>>,
    arcs: Vec<FlowArc>,
    level: Vec<i64>,
    cursor: Vec<usize>,
}

impl Residual {
    fn new(network: &FlowNetwork) -> Self {
        let nb_nodes = network.get_nb_nodes();
        Residual {
            adjacency: network.adjacency.clone(),
            arcs: network.arcs.clone(),
            level: vec![-1; nb_nodes],
            cursor: vec![0; nb_nodes],
        }
    }

    /// breadth-first search building the level graph; returns true if the sink is reachable
    fn bfs_levels(&mut self, source: usize, sink: usize) -> bool {
        self.level.iter_mut().for_each(|l| *l = -1);
        self.level[source] = 0;
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            for &e in &self.adjacency[v] {
                let arc = self.arcs[e];
                if arc.cap > FLOW_EPSILON && self.level[arc.to] < 0 {
                    self.level[arc.to] = self.level[v] + 1;
                    queue.push_back(arc.to);
                }
            }
        }
        self.level[sink] >= 0
    } // end of bfs_levels

    /// depth-first search for one augmenting path inside the level graph
    fn dfs_augment(&mut self, v: usize, sink: usize, pushed: f64) -> f64 {
        if v == sink {
            return pushed;
        }
        while self.cursor[v] < self.adjacency[v].len() {
            let e = self.adjacency[v][self.cursor[v]];
            let (to, cap) = (self.arcs[e].to, self.arcs[e].cap);
            if cap > FLOW_EPSILON && self.level[to] == self.level[v] + 1 {
                let flow = self.dfs_augment(to, sink, pushed.min(cap));
                if flow > FLOW_EPSILON {
                    self.arcs[e].cap -= flow;
                    self.arcs[e ^ 1].cap += flow;
                    return flow;
                }
            }
            self.cursor[v] += 1;
        }
        0.
    } // end of dfs_augment

    fn max_flow(&mut self, source: usize, sink: usize) -> Result<f64> {
        let nb_nodes = self.level.len();
        let mut value = 0.;
        let mut nb_phases = 0usize;
        while self.bfs_levels(source, sink) {
            // each phase strictly increases the source-sink distance, so more
            // phases than nodes means the residual invariant is broken
            nb_phases += 1;
            if nb_phases > nb_nodes {
                error!("dinic did not converge after {} phases", nb_phases);
                return Err(DensestError::SolverFailure(format!(
                    "dinic exceeded {nb_nodes} phases"
                )));
            }
            self.cursor.iter_mut().for_each(|c| *c = 0);
            loop {
                let flow = self.dfs_augment(source, sink, f64::INFINITY);
                if flow <= FLOW_EPSILON {
                    break;
                }
                value += flow;
            }
        }
        Ok(value)
    } // end of max_flow

    /// nodes still reachable from the source in the residual network :
    /// the source side of a minimum cut once the flow is maximal
    fn residual_reachable(&self, source: usize) -> Vec<usize> {
        let mut seen = vec![false; self.level.len()];
        seen[source] = true;
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            for &e in &self.adjacency[v] {
                let arc = self.arcs[e];
                if arc.cap > FLOW_EPSILON && !seen[arc.to] {
                    seen[arc.to] = true;
                    queue.push_back(arc.to);
                }
            }
        }
        let mut side: Vec<usize> = (0..seen.len()).filter(|&v| seen[v]).collect();
        side.sort_unstable();
        side
    } // end of residual_reachable
} // end of impl Residual

//==========================================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // classical small instance : max flow from 0 to 5 is 23
    fn sample_network() -> FlowNetwork {
        let mut network = FlowNetwork::new(6);
        network.add_arc(0, 1, 16.);
        network.add_arc(0, 2, 13.);
        network.add_arc(1, 2, 10.);
        network.add_arc(2, 1, 4.);
        network.add_arc(1, 3, 12.);
        network.add_arc(3, 2, 9.);
        network.add_arc(2, 4, 14.);
        network.add_arc(4, 3, 7.);
        network.add_arc(3, 5, 20.);
        network.add_arc(4, 5, 4.);
        network
    }

    #[test]
    fn dinic_small_instance() {
        log_init_test();
        let network = sample_network();
        let cut = Dinic.min_cut(&network, 0, 5).unwrap();
        assert!((cut.value - 23.).abs() < 1.0e-9);
        assert!(cut.source_side.contains(&0));
        assert!(!cut.source_side.contains(&5));
        // duality : the reported partition must carry exactly the flow value
        let recomputed = network.cut_capacity(&cut.source_side);
        assert!((recomputed - cut.value).abs() < 1.0e-9);
    } // end of dinic_small_instance

    #[test]
    fn dinic_disconnected_sink() {
        log_init_test();
        let mut network = FlowNetwork::new(4);
        network.add_arc(0, 1, 5.);
        // nodes 2,3 unreachable
        network.add_arc(2, 3, 7.);
        let cut = Dinic.min_cut(&network, 0, 3).unwrap();
        assert!(cut.value.abs() < 1.0e-12);
        assert_eq!(cut.source_side, vec![0, 1]);
    }

    #[test]
    fn dinic_rejects_bad_terminals() {
        log_init_test();
        let network = FlowNetwork::new(3);
        assert!(Dinic.min_cut(&network, 1, 1).is_err());
        assert!(Dinic.min_cut(&network, 0, 7).is_err());
    }

    #[test]
    fn dinic_symmetric_arcs() {
        log_init_test();
        // a single undirected edge of capacity 1 between 0 and 1, with terminals attached
        let mut network = FlowNetwork::new(4);
        network.add_arc(2, 0, 10.);
        network.add_symmetric_arc(0, 1, 1.);
        network.add_arc(1, 3, 10.);
        let cut = Dinic.min_cut(&network, 2, 3).unwrap();
        assert!((cut.value - 1.).abs() < 1.0e-9);
    }
} // end of mod tests
