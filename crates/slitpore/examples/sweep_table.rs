//! Reference-scenario sweep probe.
//!
//! Purpose
//! - Print the angle/overlap table for the reference pore and slit (pore
//!   [5,6]×[5,6], slit [1,10]×[−0.5,0.5], discretization 100, 50 frames)
//!   together with the wall-clock cost of the full sweep.
//! - Provide a code-backed data point for "how long does a 100×100 lattice
//!   sweep take?" instead of estimates.

use std::time::Instant;

use slitpore::prelude::*;

fn main() {
    let pore = Extent::new(5.0, 6.0, 5.0, 6.0).expect("pore extent");
    let slit = Extent::new(1.0, 10.0, -0.5, 0.5).expect("slit extent");
    let slit_grid = make_grid(&slit, 100).expect("slit grid");

    let start = Instant::now();
    let frames: Vec<Frame> = sweep(&slit_grid, &pore, angle_sweep(50))
        .expect("sweep")
        .collect();
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    for frame in &frames {
        println!("{:6.2} {:6.2}", frame.angle_degrees(), frame.overlap_pct);
    }
    println!(
        "frames={} points_per_frame={} sweep_time_ms={elapsed:.3}",
        frames.len(),
        slit_grid.len()
    );
}
