//! Unit tests for nav-sim.

use std::sync::Arc;

use nav_agent::{Agent, AgentParams};
use nav_cells::{PlaceCellParams, PlaceCells, RatePopulation};
use nav_core::{ComponentRng, Point, SimConfig, Step};
use nav_env::{Environment, EnvironmentConfig};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn env() -> Arc<Environment> {
    Arc::new(Environment::new(EnvironmentConfig::default()).unwrap())
}

fn agent(env: &Arc<Environment>, dt: f64, seed: u64) -> Agent {
    let params = AgentParams {
        dt,
        ..AgentParams::default()
    };
    Agent::new(Arc::clone(env), params, ComponentRng::new(seed, 0)).unwrap()
}

fn place_population(env: &Arc<Environment>, n: usize, seed: u64) -> RatePopulation {
    let params = PlaceCellParams {
        n,
        ..PlaceCellParams::default()
    };
    let pcs = PlaceCells::new(Arc::clone(env), params, &mut ComponentRng::new(seed, 1)).unwrap();
    RatePopulation::new("place_cells", pcs)
}

fn config(duration_secs: f64, dt_secs: f64) -> SimConfig {
    SimConfig {
        duration_secs,
        dt_secs,
        seed: 42,
        snapshot_interval_steps: 0,
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

mod builder {
    use super::*;

    #[test]
    fn dt_mismatch_rejected() {
        let env = env();
        let result = SimBuilder::new(config(10.0, 0.05), agent(&env, 0.1, 1)).build();
        assert!(matches!(result, Err(SimError::DtMismatch { .. })));
    }

    #[test]
    fn invalid_config_rejected() {
        let env = env();
        let result = SimBuilder::new(config(10.0, 0.0), agent(&env, 0.05, 1)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn dimensionality_mismatch_rejected() {
        use nav_cells::{GridCellParams, GridCells};
        use nav_env::Dimensionality;

        // Grid cells built against a 2D arena, agent living on a 1D track.
        let arena = env();
        let gcs =
            GridCells::new(arena, GridCellParams::default(), &mut ComponentRng::new(1, 1)).unwrap();

        let track = Arc::new(
            Environment::new(EnvironmentConfig {
                dimensionality: Dimensionality::OneD,
                ..EnvironmentConfig::default()
            })
            .unwrap(),
        );
        let result = SimBuilder::new(config(1.0, 0.05), agent(&track, 0.05, 1))
            .population(RatePopulation::new("grid_cells", gcs))
            .build();
        assert!(matches!(result, Err(SimError::DimensionalityMismatch { .. })));
    }

    #[test]
    fn valid_inputs_build() {
        let env = env();
        let sim = SimBuilder::new(config(10.0, 0.05), agent(&env, 0.05, 1))
            .population(place_population(&env, 20, 1))
            .build()
            .unwrap();
        assert_eq!(sim.populations.len(), 1);
        assert_eq!(sim.clock.current_step, Step::ZERO);
    }
}

// ── The step loop ─────────────────────────────────────────────────────────────

mod stepping {
    use super::*;

    #[test]
    fn histories_stay_in_lockstep() {
        let env = env();
        let mut sim = SimBuilder::new(config(5.0, 0.05), agent(&env, 0.05, 7))
            .population(place_population(&env, 30, 7))
            .population(place_population(&env, 10, 8))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert_eq!(sim.agent.history().len(), 100);
        for pop in &sim.populations {
            assert_eq!(pop.history().len(), 100);
            assert!(pop.history().rate_vectors().iter().all(|v| v.len() == pop.len()));
        }
    }

    #[test]
    fn zero_duration_runs_zero_steps() {
        let env = env();
        let mut sim = SimBuilder::new(config(0.0, 0.05), agent(&env, 0.05, 7))
            .population(place_population(&env, 10, 7))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agent.history().len(), 0);
        assert_eq!(sim.populations[0].history().len(), 0);
    }

    #[test]
    fn step_count_truncates_partial_steps() {
        // 10.25 s at 0.5 s/step is 20.5 steps; the driver runs 20.
        let env = env();
        let mut sim = SimBuilder::new(config(10.25, 0.5), agent(&env, 0.5, 7)).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agent.history().len(), 20);
        assert_eq!(sim.clock.current_step, Step(20));
    }

    #[test]
    fn populations_fire_on_the_post_update_position() {
        let env = env();
        let mut sim = SimBuilder::new(config(2.0, 0.05), agent(&env, 0.05, 11))
            .population(place_population(&env, 25, 11))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        // Entry i of the rate history must be the model's response at entry i
        // of the position history.  Any agent-after-cells ordering slip would
        // shift these by one step.
        let positions = sim.agent.history().positions();
        let pop = &sim.populations[0];
        for (i, &pos) in positions.iter().enumerate() {
            assert_eq!(pop.history().rate_vectors()[i], pop.probe(pos), "step {i}");
        }
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed: u64| {
            let env = env();
            let mut sim = SimBuilder::new(config(3.0, 0.05), agent(&env, 0.05, seed))
                .population(place_population(&env, 15, seed))
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            (
                sim.agent.history().positions().to_vec(),
                sim.populations[0].history().rate_vectors().to_vec(),
            )
        };
        assert_eq!(run(3), run(3));
        assert_ne!(run(3).0, run(4).0);
    }

    #[test]
    fn long_integer_dt_scenario() {
        // 2000 s at dt = 1 s: exactly 2000 entries in every history.
        let env = env();
        let mut sim = SimBuilder::new(config(2000.0, 1.0), agent(&env, 1.0, 42))
            .population(place_population(&env, 100, 42))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agent.history().len(), 2000);
        assert_eq!(sim.populations[0].history().len(), 2000);
        assert!((sim.agent.time() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn run_steps_ignores_end_step() {
        let env = env();
        let mut sim = SimBuilder::new(config(1.0, 0.05), agent(&env, 0.05, 7)).build().unwrap();
        sim.run_steps(50, &mut NoopObserver).unwrap();
        assert_eq!(sim.agent.history().len(), 50);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

mod observers {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        starts: usize,
        ends: usize,
        snapshots: Vec<Step>,
        sim_ends: usize,
        last_pos: Option<Point>,
    }

    impl SimObserver for CountingObserver {
        fn on_step_start(&mut self, _step: Step) {
            self.starts += 1;
        }
        fn on_step_end(&mut self, _step: Step, pos: Point) {
            self.ends += 1;
            self.last_pos = Some(pos);
        }
        fn on_snapshot(
            &mut self,
            step: Step,
            _agent: &Agent,
            _populations: &[RatePopulation],
        ) {
            self.snapshots.push(step);
        }
        fn on_sim_end(&mut self, _final_step: Step) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_once_per_step() {
        let env = env();
        let mut sim = SimBuilder::new(
            SimConfig {
                duration_secs: 0.5,
                dt_secs: 0.05,
                seed: 1,
                snapshot_interval_steps: 2,
            },
            agent(&env, 0.05, 1),
        )
        .build()
        .unwrap();

        let mut obs = CountingObserver::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.starts, 10);
        assert_eq!(obs.ends, 10);
        assert_eq!(obs.sim_ends, 1);
        // Steps 0, 2, 4, 6, 8.
        assert_eq!(obs.snapshots, vec![Step(0), Step(2), Step(4), Step(6), Step(8)]);
        assert_eq!(obs.last_pos, Some(sim.agent.pos()));
    }

    #[test]
    fn zero_interval_means_no_snapshots() {
        let env = env();
        let mut sim = SimBuilder::new(config(0.5, 0.05), agent(&env, 0.05, 1)).build().unwrap();
        let mut obs = CountingObserver::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
        assert_eq!(obs.ends, 10);
    }
}
