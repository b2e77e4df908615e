//! Example listing the faces of a small grid with their indices.
//!
//! This example shows how to:
//! - Build a `FaceEnumerator` for a grid shape and face dimension
//! - Inspect the block table
//! - Decode indices into faces and render them
//!
//! # Usage
//!
//! List the edges of a 2×3 grid:
//!
//! ```sh
//! cargo run --example list_faces -- --extents 2,3 --dimension 1
//! ```
//!
//! Decode a single index:
//!
//! ```sh
//! cargo run --example list_faces -- --extents 2,3,4 --dimension 2 --index 17
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to see how the block table is built.

use std::{error::Error, process};

use clap::Parser;
use tensorcell_core::{Combinations, FaceEnumerator, GridShape};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid extents, one per axis (1 to 4 axes).
    #[arg(short, long, value_name = "EXTENTS", value_delimiter = ',', required = true)]
    extents: Vec<u32>,

    /// Dimension of the faces to list.
    #[arg(short, long, value_name = "K", default_value_t = 1)]
    dimension: usize,

    /// Decode only this index instead of listing faces.
    #[arg(long, value_name = "INDEX")]
    index: Option<u64>,

    /// Maximum number of faces to list.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    limit: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match (args.extents.len(), args.dimension) {
        (1, 0) => run::<1, 0>(&args),
        (1, 1) => run::<1, 1>(&args),
        (2, 0) => run::<2, 0>(&args),
        (2, 1) => run::<2, 1>(&args),
        (2, 2) => run::<2, 2>(&args),
        (3, 0) => run::<3, 0>(&args),
        (3, 1) => run::<3, 1>(&args),
        (3, 2) => run::<3, 2>(&args),
        (3, 3) => run::<3, 3>(&args),
        (4, 0) => run::<4, 0>(&args),
        (4, 1) => run::<4, 1>(&args),
        (4, 2) => run::<4, 2>(&args),
        (4, 3) => run::<4, 3>(&args),
        (4, 4) => run::<4, 4>(&args),
        (n, k) => {
            eprintln!("Unsupported grid: {n} axes with {k}-faces.");
            eprintln!("Use 1 to 4 axes and a face dimension no larger than the axis count.");
            process::exit(2);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run<const N: usize, const K: usize>(args: &Args) -> Result<(), Box<dyn Error>> {
    let shape = GridShape::new(std::array::from_fn(|axis| args.extents[axis]))?;
    let faces = FaceEnumerator::<N, K>::new(shape)?;

    if let Some(index) = args.index {
        let face = faces.decode(index)?;
        println!("{index}: {face}");
        return Ok(());
    }

    println!("Grid:");
    println!("  {shape}");
    println!("  {K}-faces: {}", faces.size());
    println!();

    println!("Blocks:");
    for block in 0..faces.block_count() {
        let directions = Combinations::<N, K>::from_rank(block)?;
        let range = faces.block_range(block);
        println!(
            "  {block}: along {directions}, {} faces, indices {}..{}",
            faces.block_size(block),
            range.start,
            range.end
        );
    }
    println!();

    println!("Faces:");
    for (index, face) in (0_u64..).zip(faces.iter().take(args.limit)) {
        println!("  {index}: {face}");
    }
    let remaining = faces
        .size()
        .saturating_sub(u64::try_from(args.limit).unwrap_or(u64::MAX));
    if remaining > 0 {
        println!("  ... {remaining} more");
    }
    Ok(())
}
