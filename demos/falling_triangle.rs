use tumble::{
    utils::{warn_if_frame_budget_exceeded, ScopedTimer},
    *,
};

const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();

    let mut sim = match Simulator::builder().build() {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("failed to build simulator: {err}");
            return;
        }
    };

    for frame in 0..300 {
        let timer = ScopedTimer::new("frame");
        let result = sim.step(1.0 / 60.0);
        warn_if_frame_budget_exceeded(timer.elapsed(), FRAME_BUDGET_MS);

        match result {
            Ok(vertices) => {
                if frame % 30 == 0 {
                    println!("frame {frame:3} t={:.3}s vertices={vertices:?}", sim.elapsed());
                }
            }
            Err(err) => {
                eprintln!("simulation stopped at frame {frame}: {err}");
                return;
            }
        }
    }

    println!(
        "Final center: {:?}, velocity: {:?}",
        sim.center_pos(),
        sim.linear_velocity()
    );
}
