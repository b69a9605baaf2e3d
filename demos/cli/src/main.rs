use std::io::Write;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use iterative_mesher::data::Point;
use iterative_mesher::{BasicMesher, Mesh, MesherConfig, SmoothingMode};
use log::info;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
  Points,
  Area,
}

/// Mesh a square, optionally with a square hole in the middle
///
/// The outer square runs counter-clockwise and the hole clockwise.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Side length of the outer square
  #[clap(long, default_value = "10.0")]
  side: f64,

  /// Side length of a centred square hole
  #[clap(long)]
  hole: Option<f64>,

  /// Target element size
  #[clap(short, long, default_value = "1.0")]
  size: f64,

  /// Refinement and smoothing passes
  #[clap(short, long, default_value = "3")]
  passes: usize,

  /// Smoothing mode
  #[clap(short, long, value_enum, default_value = "area")]
  mode: Mode,

  /// Name of a `.obj` file to write
  #[clap(short, long)]
  out: Option<String>,
}

fn square(x0: f64, y0: f64, side: f64) -> Vec<Point<f64, 2>> {
  vec![
    Point::new([x0, y0]),
    Point::new([x0 + side, y0]),
    Point::new([x0 + side, y0 + side]),
    Point::new([x0, y0 + side]),
    Point::new([x0, y0]),
  ]
}

fn write_obj(mesh: &Mesh, path: &str) -> std::io::Result<()> {
  let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
  for [x, y] in &mesh.nodes {
    writeln!(out, "v {} {} 0", x, y)?;
  }
  for [a, b, c] in &mesh.elements {
    writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
  }
  out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
  let args = Args::parse();

  let smoothing = match args.mode {
    Mode::Points => SmoothingMode::Points,
    Mode::Area => SmoothingMode::Area,
  };
  let mut mesher = BasicMesher::new(MesherConfig::new(args.size, args.passes, smoothing))?;
  mesher.add_loop(square(0.0, 0.0, args.side))?;
  if let Some(hole) = args.hole {
    let offset = (args.side - hole) / 2.0;
    let mut ring = square(offset, offset, hole);
    ring.reverse();
    mesher.add_loop(ring)?;
  }

  let now = Instant::now();
  let mut last = String::new();
  let mut progress = |percent: u8, phase: &str| {
    if percent == 100 && phase != last {
      info!("{} done", phase);
      last = phase.to_string();
    }
  };
  let (mesh, report) = mesher.triangulate_with_report(&mut progress)?;
  println!("Meshed in {:?}", now.elapsed());
  println!(
    "{} nodes, {} elements",
    mesh.node_count(),
    mesh.element_count()
  );
  println!(
    "{} refinement iterations added {} points",
    report.refinement_iterations, report.points_added
  );
  println!(
    "edges {:.3} .. {:.3}, worst quality {:.3}, {} inverted",
    report.quality.min_edge(),
    report.quality.max_edge(),
    report.quality.min_quality,
    report.quality.inverted
  );

  if let Some(path) = args.out {
    write_obj(&mesh, &path)?;
  }
  Ok(())
}
