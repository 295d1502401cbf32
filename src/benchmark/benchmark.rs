use std::time::Instant;

use tracing::warn;

use crate::configuration::config::ScenarioConfig;
use crate::configuration::error::ConfigError;
use crate::simulation::rope::RopeSimulator;

/// Build the default rope with `n` particles
pub fn make_rope(n: usize) -> Result<RopeSimulator, ConfigError> {
    let mut cfg = ScenarioConfig::default();
    cfg.rope.particle_count = n;
    RopeSimulator::new(cfg.to_simulation_config())
}

/// Benchmark `RopeSimulator::step` over a range of particle counts
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_us");

    for n in (50..=5000).step_by(250) {
        let mut rope = match make_rope(n) {
            Ok(rope) => rope,
            Err(err) => {
                warn!(particles = n, %err, "skipping rope size");
                continue;
            }
        };

        // Short ropes are cheap, average over more steps to smooth noise
        let steps = if n <= 1000 { 2000 } else { 200 };

        // Warm up
        for _ in 0..10 {
            rope.step();
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            rope.step();
        }
        let us_per_step = t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64;

        println!("{},{:.3}", n, us_per_step);
    }
}
