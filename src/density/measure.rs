//! the density oracle : |E(S)|/|S| for a subset S of vertices.

use indexmap::IndexSet;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::Undirected;

/// returns the density |E(S)|/|S| of the subgraph induced by the given subset.
///
/// The subset is given by node ranks; duplicates are accepted and counted once.
/// Returns 0. for an empty subset (and so for singletons, which induce no edge).
/// The graph is not modified. Cost is the sum of the degrees of the subset.
pub fn density<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>, subset: &[usize]) -> f64
where
    Ix: IndexType,
{
    if subset.is_empty() {
        return 0.;
    }
    let selected: IndexSet<usize> = subset.iter().copied().collect();
    // scanning neighbour lists sees every induced edge from both endpoints
    let mut twice_nb_edges: usize = 0;
    for &v in selected.iter() {
        for u in graph.neighbors(NodeIndex::new(v)) {
            if selected.contains(&u.index()) {
                twice_nb_edges += 1;
            }
        }
    }
    (twice_nb_edges as f64 / 2.) / selected.len() as f64
} // end of density

//==========================================================================================================

// end of mod tests
