use tumble::*;

fn main() {
    env_logger::init();

    let mut sim = Simulator::builder()
        .floor_height(3.0)
        .build()
        .expect("default triangle is valid");

    let dt = 1.0 / 60.0;
    for frame in 0..600 {
        let t = frame as f64 * dt;
        let anchor = DVec3::new(2.0 * t.cos(), 1.0 + 0.5 * t.sin(), 0.0);
        AnchorSpring::new(anchor, 0).apply(&mut sim);

        if let Err(err) = sim.step(dt) {
            eprintln!("simulation stopped at frame {frame}: {err}");
            return;
        }
        if frame % 60 == 0 {
            println!(
                "t={t:.2}s anchor={anchor:?} grabbed={:?} spin={:?}",
                sim.vertices()[0],
                sim.angular_velocity()
            );
        }
    }
}
