use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iterative_mesher::data::*;
use iterative_mesher::*;

use rand::Rng;
use rand::SeedableRng;

// Star-shaped loop with `n` corners around the origin.
fn random_star<R: Rng>(n: usize, rng: &mut R) -> Vec<Point<f64, 2>> {
  let mut pts: Vec<Point<f64, 2>> = (0..n)
    .map(|i| {
      let angle = i as f64 / n as f64 * std::f64::consts::TAU;
      let jitter: Point<f64, 2> = rng.gen();
      let radius = 20.0 + 10.0 * jitter[0];
      Point::new([radius * angle.cos(), radius * angle.sin()])
    })
    .collect();
  pts.push(pts[0]);
  pts
}

fn square(side: f64) -> Vec<Point<f64, 2>> {
  vec![
    Point::new([0.0, 0.0]),
    Point::new([side, 0.0]),
    Point::new([side, side]),
    Point::new([0.0, side]),
    Point::new([0.0, 0.0]),
  ]
}

fn mesher(size: f64, passes: usize, loops: Vec<Vec<Point<f64, 2>>>) -> BasicMesher {
  let config = MesherConfig::new(size, passes, SmoothingMode::Area);
  let mut mesher = BasicMesher::new(config).unwrap();
  for ring in loops {
    mesher.add_loop(ring).unwrap();
  }
  mesher
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let coarse = mesher(1.0, 3, vec![square(10.0)]);
  c.bench_function("square(10), size 1.0", |b| {
    b.iter(|| coarse.triangulate_iteratively(&mut ()).unwrap())
  });

  let fine = mesher(0.5, 5, vec![square(10.0)]);
  c.bench_function("square(10), size 0.5", |b| {
    b.iter(|| fine.triangulate_iteratively(&mut ()).unwrap())
  });

  let holed = mesher(0.5, 5, vec![square(10.0), {
    let mut hole = square(4.0);
    for pt in hole.iter_mut() {
      *pt = Point::new([pt[0] + 3.0, pt[1] + 3.0]);
    }
    hole.reverse();
    hole
  }]);
  c.bench_function("square(10) with hole, size 0.5", |b| {
    b.iter(|| holed.triangulate_iteratively(&mut ()).unwrap())
  });

  let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
  c.bench_function("random_star(100), size 2.0", |b| {
    b.iter_batched(
      || mesher(2.0, 3, vec![random_star(100, &mut rng)]),
      |mesher| mesher.triangulate_iteratively(&mut ()),
      BatchSize::SmallInput,
    )
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
