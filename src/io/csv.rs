//! Construct a (small) undirected graph from a csv edge list.
//!
//! Expected format : one edge per record, two integer node ids, extra fields
//! ignored. Lines beginning with # or % are skipped (Snap and Konect data
//! files use these as comments). Node ids need not be contiguous, they are
//! mapped to ranks in order of first appearance.
//! Self loops are rejected; a reversed duplicate of an already seen edge is
//! skipped with a warning, so the returned graph always passes
//! [crate::density::check_graph].

use std::collections::{HashMap, HashSet};
use std::fs::OpenOptions;
use std::path::Path;

use log::*;

use anyhow::anyhow;

use csv::ReaderBuilder;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;

/// loads an undirected edge list, one edge per record, fields split by delim.
pub fn undirected_from_csv(
    filepath: &Path,
    delim: u8,
) -> anyhow::Result<Graph<u32, f64, Undirected>> {
    //
    let fileres = OpenOptions::new().read(true).open(filepath);
    if fileres.is_err() {
        log::error!(
            "undirected_from_csv : could not open file {:?}",
            filepath.as_os_str()
        );
        return Err(anyhow!("undirected_from_csv : could not open file"));
    }
    let file = fileres.unwrap();
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    //
    let mut graph = Graph::<u32, f64, Undirected>::with_capacity(10_000, 100_000);
    let mut rank_of: HashMap<u64, NodeIndex> = HashMap::new();
    let mut seen_edges: HashSet<(u64, u64)> = HashSet::new();
    let mut nb_record = 0usize;
    //
    for result in rdr.records() {
        let record = result?;
        if record.is_empty() {
            continue;
        }
        let first = record.get(0).unwrap_or("");
        if first.starts_with('#') || first.starts_with('%') {
            continue;
        }
        if record.len() < 2 {
            return Err(anyhow!(
                "undirected_from_csv : record {} has less than 2 fields",
                nb_record
            ));
        }
        let u = first.trim().parse::<u64>()?;
        let v = record.get(1).unwrap().trim().parse::<u64>()?;
        nb_record += 1;
        if log::log_enabled!(Level::Trace) {
            log::trace!("record {} : {} {}", nb_record, u, v);
        }
        if u == v {
            return Err(anyhow!(
                "undirected_from_csv : self loop on node {} at record {}",
                u,
                nb_record
            ));
        }
        if !seen_edges.insert((u.min(v), u.max(v))) {
            log::warn!("skipping duplicate edge ({}, {})", u, v);
            continue;
        }
        let u_idx = *rank_of
            .entry(u)
            .or_insert_with(|| graph.add_node(u as u32));
        let v_idx = *rank_of
            .entry(v)
            .or_insert_with(|| graph.add_node(v as u32));
        graph.add_edge(u_idx, v_idx, 1.);
    }
    //
    log::info!(
        "undirected_from_csv : loaded {} nodes, {} edges from {} records",
        graph.node_count(),
        graph.edge_count(),
        nb_record
    );
    Ok(graph)
} // end of undirected_from_csv

//==========================================================================================================

// end of mod tests
