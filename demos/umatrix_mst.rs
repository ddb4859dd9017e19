//! Build the minimum spanning tree of a random 10×10 lattice of 3-vectors and
//! write it as GML, annotated with each node's mean neighbour distance.
//!
//! ```text
//! RUST_LOG=debug cargo run --example umatrix_mst -- out.gml
//! ```

use std::collections::BTreeMap;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use toric_mst::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "umatrix_mst.gml".to_string());
    let (nx, ny, dim) = (10, 10, 3);

    let mut rng = StdRng::seed_from_u64(42);
    let data = (0..nx * ny * dim).map(|_| rng.gen::<f64>()).collect();
    let som = SomGraph::from_lattice(Lattice::real(nx, ny, dim, data)?)?;

    // U-matrix style annotation: mean distance to the toric neighbours.
    let full = som.graph();
    let umatrix: BTreeMap<NodeId, f64> = full
        .nodes()
        .map(|n| {
            let (sum, count) = full.neighbors(n).fold((0.0, 0), |(s, c), (_, w)| (s + w, c + 1));
            (n, sum / count as f64)
        })
        .collect();
    let mut attrs = NodeAttributes::new();
    attrs.insert("umatrix".to_string(), umatrix);

    let forest = som.spanning_forest()?;
    info!(
        "MST: {} edges, total weight {:.4}, {} component(s)",
        forest.num_edges(),
        forest.total_weight(),
        forest.num_components()
    );

    som.write_gml(&out, None, false, &attrs)?;
    println!("Wrote {out}");
    Ok(())
}
