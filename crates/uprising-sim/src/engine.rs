//! Session engine: the core of the game.
//!
//! `Session` owns the world, the session aggregate and the RNG, processes
//! player commands, runs all systems, and produces `SessionSnapshot`s.
//! Completely headless, so runs are reproducible from a seed.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use uprising_ai::police::PoliceAction;
use uprising_ai::protester::ProtesterAction;
use uprising_core::commands::PlayerCommand;
use uprising_core::config::SimConfig;
use uprising_core::constants::MAX_DT;
use uprising_core::enums::{GamePhase, Outcome};
use uprising_core::error::ConfigError;
use uprising_core::events::SimEvent;
use uprising_core::state::SessionSnapshot;
use uprising_core::types::SimTime;

use crate::systems;
use crate::systems::input::InputState;
use crate::systems::snapshot::SnapshotInput;
use crate::world::{SessionStats, World};
use crate::world_setup;

/// One play session. Owns every entity and all session state.
pub struct Session {
    config: SimConfig,
    world: World,
    stats: SessionStats,
    time: SimTime,
    phase: GamePhase,
    outcome: Option<Outcome>,
    rng: ChaCha8Rng,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    protester_actions: Vec<ProtesterAction>,
    police_actions: Vec<PoliceAction>,
}

impl Session {
    /// Create a session in the briefing phase, seeded from `config`.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = world_setup::build_world(&mut rng);
        tracing::info!(seed = config.seed, "session initialised");
        Self {
            config,
            world,
            stats: SessionStats::default(),
            time: SimTime::default(),
            phase: GamePhase::Briefing,
            outcome: None,
            rng,
            input: InputState::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            protester_actions: Vec::new(),
            police_actions: Vec::new(),
        }
    }

    /// Like [`Session::new`], but rejects an invalid configuration.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Re-run session initialisation from the configured seed. Commands
    /// still queued are discarded.
    pub fn reset(&mut self) {
        self.command_queue.clear();
        self.protester_actions.clear();
        self.police_actions.clear();
        self.reinit();
    }

    /// Rebuild every entity and aggregate. Leaves the command queue alone so
    /// commands behind a `Restart` in the same batch still apply.
    fn reinit(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.world = world_setup::build_world(&mut self.rng);
        self.stats = SessionStats::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Briefing;
        self.outcome = None;
        self.input = InputState::default();
        self.events.clear();
        tracing::info!(seed = self.config.seed, "session reset");
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one tick of the configured length.
    pub fn step(&mut self) -> SessionSnapshot {
        self.tick(self.config.dt)
    }

    /// Drain queued commands, then, if playing, advance the session by `dt`
    /// seconds. Non-finite or negative steps count as zero; steps above the
    /// maximum are clamped.
    pub fn tick(&mut self, dt: f32) -> SessionSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { 0.0 };
            self.time.advance(dt);
            self.run_systems(dt);
        }

        self.snapshot()
    }

    /// Snapshot of the current state. Drains pending events.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        systems::snapshot::build_snapshot(SnapshotInput {
            world: &self.world,
            stats: &self.stats,
            time: self.time,
            phase: self.phase,
            outcome: self.outcome,
            selection: self.input.selection_rect(),
            events: std::mem::take(&mut self.events),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of all entities.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Mutable world access for staging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn stats_mut(&mut self) -> &mut SessionStats {
        &mut self.stats
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == GamePhase::Briefing {
                    self.phase = GamePhase::Playing;
                    tracing::info!("session started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Restart => self.reinit(),
            gameplay if gameplay.is_gameplay() => {
                if self.phase == GamePhase::Playing {
                    systems::input::apply(gameplay, &mut self.input, &mut self.world, &mut self.events);
                }
            }
            _ => {}
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let now = self.time.elapsed_secs;

        // 1. Protesters
        systems::protesters::run(
            &mut self.world,
            &mut self.stats,
            &mut self.protester_actions,
            &mut self.events,
            now,
            dt,
        );
        // 2. Police
        systems::police::run(
            &mut self.world,
            &mut self.stats,
            &mut self.rng,
            &mut self.police_actions,
            &mut self.events,
            dt,
        );
        // 3. Tear gas
        systems::tear_gas::run(&mut self.world, &mut self.stats, dt);
        // 4. Helicopter
        systems::helicopter::run(&mut self.world, &mut self.rng, &mut self.events, now, dt);
        // 5. Police surge
        systems::surge::run(&mut self.world, &mut self.stats, &mut self.events, now);
        // 6. Projectiles
        systems::projectiles::run(&mut self.world, &mut self.stats, &mut self.events, dt);
        // 7. Fire cooldowns
        systems::police::cool_down(&mut self.world, dt);
        // 8. Win / lose
        if let Some(outcome) = systems::victory::run(&self.world, &mut self.stats, now, dt) {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = outcome.phase();
        self.input = InputState::default();
        let event = match outcome {
            Outcome::Won(reason) => SimEvent::SessionWon { reason },
            Outcome::Lost(reason) => SimEvent::SessionLost { reason },
        };
        self.events.push(event);
        tracing::info!(
            ?outcome,
            tick = self.time.tick,
            elapsed = self.time.elapsed_secs,
            morale = self.stats.global_morale,
            max_morale = self.stats.max_morale,
            arrests = self.stats.arrests,
            "session over"
        );
    }
}
