use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use slitpore::grid::{make_grid, Extent, PointGrid};
use slitpore::overlap::{angle_sweep, sweep};

mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Slit/pore rotation-overlap runner and animator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Geometry of a run: pore, slit, lattice resolution, frame count.
#[derive(Args)]
struct Geometry {
    /// Pore extent as x_min,x_max,y_min,y_max
    #[arg(long, default_value = "5,6,5,6")]
    pore: String,

    /// Initial (unrotated) slit extent as x_min,x_max,y_min,y_max
    #[arg(long, default_value = "1,10,-0.5,0.5")]
    slit: String,

    /// Lattice points per axis for both grids
    #[arg(long, default_value_t = 100)]
    discretization: usize,

    /// Number of sweep angles over [0, pi/2]
    #[arg(long, default_value_t = 50)]
    frames: usize,
}

#[derive(Subcommand)]
enum Action {
    /// Run the rotation sweep and write an animated GIF
    Animate {
        #[command(flatten)]
        geometry: Geometry,
        /// Output GIF path
        #[arg(long)]
        out: String,
        /// Frame edge length in pixels
        #[arg(long, default_value_t = 480)]
        size: u32,
        /// Per-frame delay in milliseconds
        #[arg(long, default_value_t = 80)]
        delay_ms: u32,
    },
    /// Print the per-frame angle/overlap table
    Table {
        #[command(flatten)]
        geometry: Geometry,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Animate {
            geometry,
            out,
            size,
            delay_ms,
        } => animate(geometry, out, size, delay_ms),
        Action::Table { geometry } => table(geometry),
        Action::Report => report(),
    }
}

/// Immutable inputs of one run, built once up front.
struct Scene {
    pore: Extent,
    slit: Extent,
    pore_grid: PointGrid,
    slit_grid: PointGrid,
    angles: Vec<f64>,
}

fn build_scene(geometry: &Geometry) -> Result<Scene> {
    let pore = parse_extent(&geometry.pore)?;
    let slit = parse_extent(&geometry.slit)?;
    let pore_grid = make_grid(&pore, geometry.discretization)?;
    let slit_grid = make_grid(&slit, geometry.discretization)?;
    let angles = angle_sweep(geometry.frames);
    if angles.is_empty() {
        bail!("need at least one frame");
    }
    Ok(Scene {
        pore,
        slit,
        pore_grid,
        slit_grid,
        angles,
    })
}

fn animate(geometry: Geometry, out: String, size: u32, delay_ms: u32) -> Result<()> {
    tracing::info!(
        out,
        pore = geometry.pore,
        slit = geometry.slit,
        discretization = geometry.discretization,
        frames = geometry.frames,
        "animate"
    );
    if size < 16 {
        bail!("--size must be at least 16 pixels");
    }
    let scene = build_scene(&geometry)?;

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let view = render::view_window(&scene.pore, &scene.slit);
    let mut writer = render::GifWriter::create(out_path, delay_ms)?;
    for frame in sweep(&scene.slit_grid, &scene.pore, scene.angles.clone())? {
        let angle_deg = round2(frame.angle_degrees());
        let overlap_pct = round2(frame.overlap_pct);
        tracing::info!(angle_deg, overlap_pct, "frame");
        writer.push(render::raster_frame(&frame, &scene.pore_grid, view, size))?;
    }

    provenance::write_sidecar(
        out_path,
        serde_json::json!({
            "pore": geometry.pore,
            "slit": geometry.slit,
            "discretization": geometry.discretization,
            "frames": geometry.frames,
            "size_px": size,
            "delay_ms": delay_ms,
        }),
    )?;
    Ok(())
}

fn table(geometry: Geometry) -> Result<()> {
    let scene = build_scene(&geometry)?;
    for frame in sweep(&scene.slit_grid, &scene.pore, scene.angles.clone())? {
        println!("{:.2} {:.2}", frame.angle_degrees(), frame.overlap_pct);
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": slitpore::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Parse "x_min,x_max,y_min,y_max" into a validated extent.
fn parse_extent(raw: &str) -> Result<Extent> {
    let bounds = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .with_context(|| format!("parsing extent '{raw}'"))?;
    if bounds.len() != 4 {
        bail!("extent '{raw}' needs exactly four comma-separated bounds");
    }
    Ok(Extent::new(bounds[0], bounds[1], bounds[2], bounds[3])?)
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extent_accepts_reference_defaults() {
        let pore = parse_extent("5,6,5,6").unwrap();
        assert_eq!(pore, Extent::new(5.0, 6.0, 5.0, 6.0).unwrap());
        let slit = parse_extent("1,10,-0.5,0.5").unwrap();
        assert_eq!(slit, Extent::new(1.0, 10.0, -0.5, 0.5).unwrap());
    }

    #[test]
    fn parse_extent_rejects_garbage() {
        assert!(parse_extent("5,6,5").is_err());
        assert!(parse_extent("5,6,5,6,7").is_err());
        assert!(parse_extent("a,b,c,d").is_err());
        // Well-formed list but empty rectangle.
        assert!(parse_extent("6,5,5,6").is_err());
    }

    #[test]
    fn round2_matches_display_precision() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(90.0), 90.0);
    }
}
