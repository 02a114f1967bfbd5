use approx::assert_abs_diff_eq;
use tumble::*;

fn make_sim() -> Simulator {
    Simulator::builder()
        .floor_height(1000.0)
        .coefficients(Coefficients::frictionless_vacuum())
        .build()
        .expect("valid body")
}

#[test]
fn anchor_spring_lifts_attached_vertex() {
    let mut sim = make_sim();
    let vertex = sim.vertices()[0];
    let spring = AnchorSpring::new(vertex + DVec3::new(0.0, 2.0, 0.0), 0);

    spring.apply(&mut sim);
    assert_eq!(sim.force_queue().pending_forces().len(), 1);
    assert_eq!(sim.force_queue().pending_torques().len(), 1);

    sim.step(0.1).unwrap();

    // 20 N upward for 0.1 s on a 1 kg body.
    assert_abs_diff_eq!(sim.linear_velocity().y, 2.0, epsilon = 1e-12);
    // Lever (-0.5, 1.5, 0) crossed with (0, 20, 0).
    assert_abs_diff_eq!(sim.angular_momentum().z, -1.0, epsilon = 1e-12);
}

#[test]
fn anchor_out_of_reach_moves_the_center() {
    let mut sim = make_sim();
    let anchor = DVec3::new(50.0, 0.0, 0.0);

    AnchorSpring::new(anchor, 1).apply(&mut sim);

    assert_eq!(sim.center_pos(), anchor);
    assert!(sim.force_queue().is_empty());
    let expected = anchor + sim.body().body_vertices[1];
    assert!(sim.vertices()[1].abs_diff_eq(expected, 1e-12));
}

#[test]
fn anchor_below_the_floor_lifts_the_teleported_body() {
    let mut sim = Simulator::builder()
        .floor_height(0.0)
        .position(DVec3::new(0.0, 3.0, 0.0))
        .build()
        .expect("valid body");

    AnchorSpring::new(DVec3::new(50.0, -3.0, 0.0), 0).apply(&mut sim);

    // Vertex 1 hangs 1 m below the center, so the center lands at 1.5 m.
    assert!(sim.center_pos().abs_diff_eq(DVec3::new(50.0, 1.5, 0.0), 1e-12));
    let clearance = sim
        .vertices()
        .iter()
        .map(|v| sim.floor().signed_distance(*v))
        .fold(f64::INFINITY, f64::min);
    assert_abs_diff_eq!(clearance, 0.5, epsilon = 1e-12);

    sim.step(1.0 / 60.0).expect("teleported body starts clear of the floor");
}

#[test]
fn anchor_with_out_of_range_vertex_index_does_not_panic() {
    let mut sim = make_sim();
    let spring = AnchorSpring {
        vertex_index: 9,
        ..AnchorSpring::new(DVec3::ZERO, 0)
    };

    spring.apply(&mut sim);

    assert_eq!(sim.force_queue().pending_forces().len(), 1);
}

#[test]
fn closures_act_as_force_generators() {
    let mut sim = make_sim();
    let wind = |sim: &mut Simulator| sim.apply_force(DVec3::new(0.0, 0.0, 4.0));

    wind.apply(&mut sim);
    wind.apply(&mut sim);
    sim.step(0.25).unwrap();

    assert_abs_diff_eq!(sim.linear_velocity().z, 2.0, epsilon = 1e-12);
}

#[test]
fn repeated_dragging_stays_stable() {
    let mut sim = Simulator::builder()
        .floor_height(5.0)
        .build()
        .expect("valid body");

    for frame in 0..300 {
        let t = frame as f64 / 60.0;
        let anchor = DVec3::new(t.cos(), 2.0 + 0.5 * t.sin(), 0.0);
        AnchorSpring::new(anchor, 0).apply(&mut sim);
        sim.step(1.0 / 60.0).expect("anchored body never reaches the floor");
    }

    assert!(sim.linear_velocity().is_finite());
    assert!(sim.center_pos().y > -5.0);
}
