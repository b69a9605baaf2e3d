mod mesher {
  use iterative_mesher::data::*;
  use iterative_mesher::*;

  fn square(x0: f64, y0: f64, side: f64) -> Vec<Point<f64, 2>> {
    vec![
      Point::new([x0, y0]),
      Point::new([x0 + side, y0]),
      Point::new([x0 + side, y0 + side]),
      Point::new([x0, y0 + side]),
      Point::new([x0, y0]),
    ]
  }

  fn clockwise(mut ring: Vec<Point<f64, 2>>) -> Vec<Point<f64, 2>> {
    ring.reverse();
    ring
  }

  fn centroid(mesh: &Mesh, idx: usize) -> Point<f64, 2> {
    let [a, b, c] = mesh.element_points(idx).unwrap();
    Point::new([(a[0] + b[0] + c[0]) / 3.0, (a[1] + b[1] + c[1]) / 3.0])
  }

  fn signed_area(mesh: &Mesh, idx: usize) -> f64 {
    let [a, b, c] = mesh.element_points(idx).unwrap();
    ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])) / 2.0
  }

  fn mesher(size: f64, passes: usize, loops: Vec<Vec<Point<f64, 2>>>) -> Result<BasicMesher, Error> {
    let mut mesher = BasicMesher::new(MesherConfig::new(size, passes, SmoothingMode::Area))?;
    for ring in loops {
      mesher.add_loop(ring)?;
    }
    Ok(mesher)
  }

  #[test]
  fn coarse_square() -> Result<(), Error> {
    let mesher = mesher(5.0, 0, vec![square(0.0, 0.0, 10.0)])?;
    let (mesh, report) = mesher.triangulate_with_report(&mut ())?;
    assert_eq!(mesh.node_count(), 4);
    assert_eq!(mesh.element_count(), 2);
    // Euler: 2V - B - 2.
    assert_eq!(mesh.element_count(), 2 * 4 - 4 - 2);
    assert_eq!(
      mesh.nodes,
      vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]
    );
    assert!(mesh.is_valid());

    let mut used: Vec<usize> = mesh.elements.iter().flatten().copied().collect();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used, vec![0, 1, 2, 3]);

    let area: f64 = (0..2).map(|i| signed_area(&mesh, i)).sum();
    assert!((area + 100.0).abs() < 1e-9);

    assert_eq!(report.refinement_iterations, 0);
    assert_eq!(report.points_added, 0);
    assert_eq!(report.quality.min_squared_edge, 100.0);
    assert!((report.quality.max_squared_edge - 200.0).abs() < 1e-9);
    assert!((report.quality.min_quality - (2.0 * 2f64.sqrt() - 2.0)).abs() < 1e-12);
    assert_eq!(report.quality.inverted, 0);
    Ok(())
  }

  #[test]
  fn exported_elements_are_clockwise() -> Result<(), Error> {
    let mesher = mesher(5.0, 0, vec![square(0.0, 0.0, 10.0)])?;
    let mesh = mesher.triangulate_iteratively(&mut ())?;
    for i in 0..mesh.element_count() {
      assert!(signed_area(&mesh, i) < 0.0);
    }
    Ok(())
  }

  #[test]
  fn clockwise_outer_loop_is_not_meshed() -> Result<(), Error> {
    let cw = mesher(5.0, 0, vec![clockwise(square(0.0, 0.0, 10.0))])?;
    assert_eq!(cw.triangulate_iteratively(&mut ()), Err(Error::NoTriangulation));
    Ok(())
  }

  #[test]
  fn hole_is_left_empty() -> Result<(), Error> {
    let outer = square(0.0, 0.0, 10.0);
    let inner = clockwise(square(4.0, 4.0, 2.0));
    let hole = BoundaryLoop::new(inner.clone())?;
    let mesher = mesher(2.5, 1, vec![outer, inner])?;
    let mesh = mesher.triangulate_iteratively(&mut ())?;
    assert!(mesh.is_valid());
    assert!(mesh.element_count() > 0);
    for i in 0..mesh.element_count() {
      assert!(!hole.contains(&centroid(&mesh, i)), "element {} is in the hole", i);
    }
    Ok(())
  }

  #[test]
  fn island_inside_a_hole_is_meshed() -> Result<(), Error> {
    let hole = clockwise(square(5.0, 5.0, 20.0));
    let island = BoundaryLoop::new(square(10.0, 10.0, 10.0))?;
    let mesher = mesher(
      100.0,
      0,
      vec![square(0.0, 0.0, 30.0), hole.clone(), square(10.0, 10.0, 10.0)],
    )?;
    let mesh = mesher.triangulate_iteratively(&mut ())?;
    let hole = BoundaryLoop::new(hole)?;
    let mut island_elements = 0;
    for i in 0..mesh.element_count() {
      let c = centroid(&mesh, i);
      if island.contains(&c) {
        island_elements += 1;
      } else {
        assert!(!hole.contains(&c), "element {} is in the hole", i);
      }
    }
    assert!(island_elements > 0);
    Ok(())
  }

  #[test]
  fn disjoint_loops_are_both_meshed() -> Result<(), Error> {
    let mesher = mesher(
      5.0,
      0,
      vec![square(0.0, 0.0, 10.0), square(20.0, 0.0, 10.0)],
    )?;
    let mesh = mesher.triangulate_iteratively(&mut ())?;
    assert_eq!(mesh.node_count(), 8);
    assert_eq!(mesh.element_count(), 4);
    Ok(())
  }

  #[test]
  fn refinement_terminates_within_budget() -> Result<(), Error> {
    let mesher = mesher(1.0, 3, vec![square(0.0, 0.0, 10.0)])?;
    let (mesh, report) = mesher.triangulate_with_report(&mut ())?;
    assert!(report.refinement_iterations <= 3);
    assert!(report.refinement_iterations == 3 || report.last_iteration_added == 0);
    assert!(report.points_added > 0);
    assert_eq!(mesh.node_count(), 4 + report.points_added);
    assert_eq!(report.smoothing_passes, 3);
    assert!(mesh.is_valid());
    assert!(mesh.element_count() > 2);
    assert!(mesh.nodes.iter().all(|n| n[0].is_finite() && n[1].is_finite()));
    Ok(())
  }

  #[test]
  fn refinement_converges_with_a_large_budget() -> Result<(), Error> {
    let size = 1.0;
    let passes = 40;
    let mesher = mesher(size, passes, vec![square(0.0, 0.0, 10.0)])?;
    let state = mesher.build(&mut ())?;
    let report = state.report();
    assert!(report.refinement_iterations <= passes);
    assert!(
      report.last_iteration_added == 0 || report.quality.max_edge() <= 1.5 * size,
      "{} iterations, last added {}, longest edge {}",
      report.refinement_iterations,
      report.last_iteration_added,
      report.quality.max_edge()
    );
    assert!(state.export().is_valid());
    Ok(())
  }

  #[test]
  fn refined_points_stay_in_the_square() -> Result<(), Error> {
    let mut mesher = BasicMesher::new(MesherConfig::new(2.0, 4, SmoothingMode::Points))?;
    mesher.add_loop(square(0.0, 0.0, 10.0))?;
    let mesh = mesher.triangulate_iteratively(&mut ())?;
    for node in &mesh.nodes {
      assert!((0.0..=10.0).contains(&node[0]));
      assert!((0.0..=10.0).contains(&node[1]));
    }
    Ok(())
  }

  #[test]
  fn export_is_repeatable() -> Result<(), Error> {
    let mesher = mesher(2.0, 2, vec![square(0.0, 0.0, 10.0)])?;
    let state = mesher.build(&mut ())?;
    assert_eq!(state.export(), state.export());
    assert_eq!(state.quality(), state.quality());
    Ok(())
  }

  #[test]
  fn runs_are_deterministic() -> Result<(), Error> {
    let mesher = mesher(1.5, 3, vec![square(0.0, 0.0, 10.0), clockwise(square(3.0, 3.0, 2.0))])?;
    assert_eq!(
      mesher.triangulate_iteratively(&mut ())?,
      mesher.triangulate_iteratively(&mut ())?
    );
    Ok(())
  }

  #[test]
  fn progress_contract() -> Result<(), Error> {
    let mesher = mesher(2.0, 2, vec![square(0.0, 0.0, 10.0)])?;
    let mut seen: Vec<(u8, String)> = Vec::new();
    let mut sink = |percent: u8, phase: &str| seen.push((percent, phase.to_string()));
    mesher.triangulate_iteratively(&mut sink)?;

    let mut phases: Vec<String> = Vec::new();
    for (_, phase) in &seen {
      if phases.last() != Some(phase) {
        phases.push(phase.clone());
      }
    }
    assert_eq!(phases.first().map(String::as_str), Some("triangulating"));
    assert!(phases.iter().any(|p| p == "refinement iteration 1"));
    assert_eq!(
      &phases[phases.len() - 2..],
      &["smoothing pass 1".to_string(), "smoothing pass 2".to_string()]
    );
    for phase in &phases {
      let percents: Vec<u8> = seen
        .iter()
        .filter(|(_, p)| p == phase)
        .map(|(percent, _)| *percent)
        .collect();
      assert_eq!(percents.last(), Some(&100), "{} did not finish", phase);
      assert!(percents.windows(2).all(|w| w[0] < w[1]));
    }
    Ok(())
  }

  #[test]
  fn cancelled_before_start() -> Result<(), Error> {
    let mesher = mesher(1.0, 3, vec![square(0.0, 0.0, 10.0)])?;
    let token = CancelToken::new();
    token.cancel();
    let mut progress = Cancellable::new((), token);
    assert_eq!(
      mesher.triangulate_iteratively(&mut progress),
      Err(Error::Cancelled)
    );
    Ok(())
  }

  #[test]
  fn cancelled_during_refinement() -> Result<(), Error> {
    let mesher = mesher(1.0, 3, vec![square(0.0, 0.0, 10.0)])?;
    let token = CancelToken::new();
    let trigger = token.clone();
    let mut last_phase = String::new();
    let sink = |_: u8, phase: &str| {
      if phase.starts_with("refinement") {
        trigger.cancel();
      }
      last_phase = phase.to_string();
    };
    let mut progress = Cancellable::new(sink, token);
    assert_eq!(
      mesher.triangulate_iteratively(&mut progress),
      Err(Error::Cancelled)
    );
    drop(progress);
    assert_eq!(last_phase, "refinement iteration 1");
    Ok(())
  }

  #[test]
  fn no_mesh_without_loops() -> Result<(), Error> {
    let mesher = mesher(1.0, 3, vec![])?;
    assert_eq!(
      mesher.triangulate_iteratively(&mut ()),
      Err(Error::NoTriangulation)
    );
    Ok(())
  }

  #[test]
  fn invalid_input_fails_fast() {
    assert_eq!(
      BasicMesher::new(MesherConfig::default().with_element_size(0.0)).err(),
      Some(Error::InvalidElementSize)
    );
    let degenerate = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([0.0, 0.0]),
    ];
    assert_eq!(
      mesher(1.0, 0, vec![degenerate]).err(),
      Some(Error::InsufficientVertices)
    );
  }
}
