//! an executable computing densest subgraphs from a csv edge list.
//! example usage:
//! densest --csv "ca-GrQc.txt" --algo exact
//! densest --csv "ca-GrQc.txt" --algo peel
//! densest --csv "ca-GrQc.txt" --algo atmostk --k 10
//!
//! exact runs the parametric max-flow solver, peel the 1/2-approximation,
//! atmostk the size-constrained variant (requires --k).

use anyhow::anyhow;
use clap::{Arg, Command};

use std::path::Path;

use graphdensity::density::{
    check_graph, densest_at_most_k_subgraph, densest_subgraph, densest_subgraph_peeling,
};
use graphdensity::io::csv::undirected_from_csv;

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();
    log::info!("logger initialized");
    //
    let matches = Command::new("densest")
        .arg(
            Arg::new("csv")
                .long("csv")
                .required(true)
                .takes_value(true)
                .help("edge list file, two integer node ids per line"),
        )
        .arg(
            Arg::new("delim")
                .long("delim")
                .takes_value(true)
                .default_value(" ")
                .help("field delimiter, a single byte"),
        )
        .arg(
            Arg::new("algo")
                .long("algo")
                .takes_value(true)
                .default_value("exact")
                .help("one of : exact, peel, atmostk"),
        )
        .arg(
            Arg::new("k")
                .long("k")
                .takes_value(true)
                .help("maximal subset size, required by atmostk"),
        )
        .get_matches();
    //
    let csv_path = matches.value_of("csv").unwrap();
    let delim_str = matches.value_of("delim").unwrap();
    if delim_str.len() != 1 {
        return Err(anyhow!("delimiter must be a single byte"));
    }
    let graph = undirected_from_csv(Path::new(csv_path), delim_str.as_bytes()[0])?;
    check_graph(&graph)?;
    //
    let (subset, density) = match matches.value_of("algo") {
        Some("exact") => densest_subgraph(&graph)?,
        Some("peel") => densest_subgraph_peeling(&graph)?,
        Some("atmostk") => {
            let k = match matches.value_of("k") {
                Some(str) => {
                    let res = str.parse::<usize>();
                    if res.is_ok() {
                        res.unwrap()
                    } else {
                        return Err(anyhow!("error parsing k"));
                    }
                }
                _ => {
                    return Err(anyhow!("atmostk requires --k"));
                }
            }; // end match
            densest_at_most_k_subgraph(&graph, k)?
        }
        _ => {
            return Err(anyhow!("unknown algorithm, expected exact, peel or atmostk"));
        }
    }; // end match
    //
    log::info!("density : {:.6e}", density);
    log::info!("subset size : {}", subset.len());
    println!("density : {:.6}", density);
    println!("subset ({} vertices) : {:?}", subset.len(), subset);
    //
    Ok(())
} // end of main
