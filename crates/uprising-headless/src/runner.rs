//! Single-session and batch execution.

use serde::{Deserialize, Serialize};

use uprising_core::commands::PlayerCommand;
use uprising_core::config::{validate_dt, SimConfig};
use uprising_core::constants::{DT, SESSION_DURATION_SECS};
use uprising_core::enums::Outcome;
use uprising_core::error::ConfigError;
use uprising_sim::Session;

use crate::error::HeadlessError;
use crate::strategies::Strategy;

/// Enough ticks at the default rate to outlast the session clock.
pub const DEFAULT_MAX_TICKS: u64 = (SESSION_DURATION_SECS as u64 + 1) * 60;

/// Configuration for one headless session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub seed: u64,
    /// Tick length in seconds.
    pub dt: f32,
    /// Hard cap on playing ticks.
    pub max_ticks: u64,
    pub strategy: Strategy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dt: DT,
            max_ticks: DEFAULT_MAX_TICKS,
            strategy: Strategy::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dt(self.dt)?;
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        Ok(())
    }

    fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            dt: self.dt,
        }
    }
}

/// Result of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub seed: u64,
    pub strategy: Strategy,
    /// `None` if the tick cap was hit first.
    pub outcome: Option<Outcome>,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub final_morale: f32,
    pub max_morale: f32,
    pub arrests: u32,
    pub survivors: usize,
    pub police_remaining: usize,
    /// Total distance walked by the whole crowd.
    pub distance_travelled: f32,
}

impl SessionReport {
    pub fn won(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Won(_)))
    }
}

/// Play one session to its end or to the tick cap.
pub fn run_session(config: &RunConfig) -> Result<SessionReport, HeadlessError> {
    config.validate()?;
    let mut session = Session::try_new(config.sim_config())?;
    let mut player = config.strategy.executor();

    tracing::debug!(seed = config.seed, strategy = ?config.strategy, "run start");
    session.queue_command(PlayerCommand::Start);
    let mut snapshot = session.step();

    while !snapshot.phase.is_over() && snapshot.time.tick < config.max_ticks {
        if let Some(player) = player.as_mut() {
            session.queue_commands(player.decide(&snapshot));
        }
        snapshot = session.step();
    }

    let stats = session.stats();
    let distance_travelled = session
        .world()
        .protesters
        .iter()
        .map(|p| p.distance_travelled)
        .sum();

    let report = SessionReport {
        seed: config.seed,
        strategy: config.strategy,
        outcome: session.outcome(),
        ticks: snapshot.time.tick,
        elapsed_secs: snapshot.time.elapsed_secs,
        final_morale: stats.global_morale,
        max_morale: stats.max_morale,
        arrests: stats.arrests,
        survivors: stats.protesters_alive,
        police_remaining: stats.police_alive,
        distance_travelled,
    };
    tracing::info!(
        seed = report.seed,
        outcome = ?report.outcome,
        ticks = report.ticks,
        "run complete"
    );
    Ok(report)
}

/// Aggregate over a batch of sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub wins: usize,
    pub losses: usize,
    /// Runs that hit the tick cap without an outcome.
    pub unfinished: usize,
    pub win_rate: f64,
    pub mean_ticks: f64,
    pub mean_final_morale: f64,
    pub reports: Vec<SessionReport>,
}

impl BatchSummary {
    fn from_reports(reports: Vec<SessionReport>) -> Self {
        let runs = reports.len();
        let wins = reports.iter().filter(|r| r.won()).count();
        let unfinished = reports.iter().filter(|r| r.outcome.is_none()).count();
        let mean = |f: &dyn Fn(&SessionReport) -> f64| {
            if runs == 0 {
                0.0
            } else {
                reports.iter().map(f).sum::<f64>() / runs as f64
            }
        };
        Self {
            runs,
            wins,
            losses: runs - wins - unfinished,
            unfinished,
            win_rate: if runs == 0 { 0.0 } else { wins as f64 / runs as f64 },
            mean_ticks: mean(&|r| r.ticks as f64),
            mean_final_morale: mean(&|r| f64::from(r.final_morale)),
            reports,
        }
    }
}

/// Run `count` sessions with consecutive seeds starting at `base.seed`.
pub fn run_batch(base: &RunConfig, count: u32) -> Result<BatchSummary, HeadlessError> {
    base.validate()?;
    let mut reports = Vec::with_capacity(count as usize);
    for offset in 0..u64::from(count) {
        let config = RunConfig {
            seed: base.seed.wrapping_add(offset),
            ..*base
        };
        reports.push(run_session(&config)?);
    }
    let summary = BatchSummary::from_reports(reports);
    tracing::info!(
        runs = summary.runs,
        wins = summary.wins,
        win_rate = summary.win_rate,
        "batch complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uprising_core::enums::{LossReason, WinReason};

    fn short(strategy: Strategy, seed: u64) -> RunConfig {
        RunConfig {
            seed,
            max_ticks: 300,
            strategy,
            ..RunConfig::default()
        }
    }

    #[test]
    fn test_zero_ticks_rejected() {
        let config = RunConfig {
            max_ticks: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            run_session(&config),
            Err(HeadlessError::Config(ConfigError::ZeroTicks))
        ));
    }

    #[test]
    fn test_bad_dt_rejected() {
        let config = RunConfig {
            dt: f32::NAN,
            ..RunConfig::default()
        };
        assert!(matches!(
            run_session(&config),
            Err(HeadlessError::Config(ConfigError::InvalidDt(_)))
        ));
    }

    #[test]
    fn test_tick_cap_stops_unfinished_run() {
        let report = run_session(&short(Strategy::Passive, 1)).unwrap();
        assert_eq!(report.ticks, 300);
        assert_eq!(report.outcome, None);
        assert!((report.elapsed_secs - 5.0).abs() < 1e-3);
        assert!(report.survivors + report.arrests as usize <= 100);
    }

    #[test]
    fn test_runs_are_reproducible() {
        for strategy in [Strategy::Passive, Strategy::Autopilot] {
            let a = run_session(&short(strategy, 9)).unwrap();
            let b = run_session(&short(strategy, 9)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_autopilot_moves_the_crowd_further() {
        let passive = run_session(&short(Strategy::Passive, 3)).unwrap();
        let pilot = run_session(&short(Strategy::Autopilot, 3)).unwrap();
        assert!(pilot.distance_travelled > passive.distance_travelled);
    }

    #[test]
    fn test_batch_uses_consecutive_seeds() {
        let summary = run_batch(&short(Strategy::Passive, 100), 3).unwrap();
        assert_eq!(summary.runs, 3);
        let seeds: Vec<u64> = summary.reports.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![100, 101, 102]);
        assert_eq!(summary.wins + summary.losses + summary.unfinished, 3);
        assert!((0.0..=1.0).contains(&summary.win_rate));
    }

    #[test]
    fn test_summary_counts_outcomes() {
        let report = |outcome| SessionReport {
            seed: 0,
            strategy: Strategy::Passive,
            outcome,
            ticks: 100,
            elapsed_secs: 1.0,
            final_morale: 40.0,
            max_morale: 60.0,
            arrests: 0,
            survivors: 100,
            police_remaining: 20,
            distance_travelled: 0.0,
        };
        let summary = BatchSummary::from_reports(vec![
            report(Some(Outcome::Won(WinReason::TerritoryHeld))),
            report(Some(Outcome::Lost(LossReason::TimeExpired))),
            report(Some(Outcome::Won(WinReason::PoliceDefeated))),
            report(None),
        ]);
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.unfinished, 1);
        assert!((summary.win_rate - 0.5).abs() < 1e-9);
        assert!((summary.mean_final_morale - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::from_reports(Vec::new());
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.win_rate, 0.0);
    }
}
