//! Build a fully-initialized rope scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! driven once per frame by the viewer or the headless loop:
//! - driver settings (`Engine`)
//! - the rope itself (`RopeSimulator`), already reset to its rest state

use tracing::{info, trace};

use crate::configuration::config::ScenarioConfig;
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::rope::RopeSimulator;

/// Runtime bundle of a rope simulation and the pause flag driving it
///
/// With the `viewer` feature this is inserted into Bevy as a `Resource`
/// and read by the stepping, input and rendering systems
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub simulator: RopeSimulator,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let engine = Engine::new(cfg.engine.start_paused);
        let simulator = RopeSimulator::new(cfg.to_simulation_config())?;

        let layout = simulator.layout();
        info!(
            particles = layout.particle_count,
            length = layout.length,
            dt = simulator.parameters().dt,
            paused = engine.paused,
            "scenario built"
        );

        Ok(Self { engine, simulator })
    }

    /// One driver tick: advance exactly one step unless paused.
    /// Returns whether the simulation moved.
    pub fn tick(&mut self) -> bool {
        if self.engine.paused {
            return false;
        }
        self.simulator.step();
        trace!(step = self.simulator.step_count(), "tick");
        true
    }

    pub fn toggle_pause(&mut self) {
        self.engine.paused = !self.engine.paused;
    }

    /// Put the rope back in its rest state and pause
    pub fn reset(&mut self) {
        self.simulator.reset();
        self.engine.paused = true;
    }
}
