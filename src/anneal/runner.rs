//! The annealing loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use u_metaheur::sa::SaConfig;
use u_numflow::random::create_rng;

use super::config::{linear_levels, next_temperature, trials_per_level, validate};
use super::stats::MoveUsage;
use crate::distance::Cost;
use crate::error::MtspError;
use crate::models::TourState;
use crate::moves::{Invoker, MoveKind, MoveRecord};

/// Whether the schedule still has temperature levels to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Temperature is above the floor.
    Running,
    /// Temperature reached the floor; no more trials run.
    Converged,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StopReason {
    /// Temperature fell to the floor.
    Converged,
    /// The `max_iterations` trial budget was spent.
    IterationLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// Move kind that was tried.
    pub kind: MoveKind,
    /// What the move changed before acceptance was decided.
    pub record: MoveRecord,
    /// Cost after the move minus cost before.
    pub delta: f64,
    /// Whether the move was kept.
    pub accepted: bool,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnealResult {
    /// Tour cost before the first trial.
    pub initial_cost: Cost,
    /// Tour cost when the run stopped.
    pub final_cost: Cost,
    /// Trials executed.
    pub trials: usize,
    /// Temperature levels completed.
    pub temperature_levels: usize,
    /// Temperature when the run stopped.
    pub final_temperature: f64,
    /// Accepted trials per move kind.
    pub usage: MoveUsage,
    /// Why the run ended.
    pub stop_reason: StopReason,
}

impl AnnealResult {
    /// Serializes the result as a JSON object.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Probability of accepting a move with cost change `delta` at `temperature`.
///
/// Improvements and lateral moves get 1. Underflow yields 0 and a non-finite
/// quotient is treated as 0.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Metropolis criterion: strict improvements always pass, anything else
/// passes if a uniform draw in `[0, 1)` falls below the acceptance probability.
pub fn metropolis_accepts<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    rng.random::<f64>() < acceptance_probability(delta, temperature)
}

/// Simulated annealing driver over a [`TourState`].
///
/// Each trial draws a move kind uniformly, executes it through an
/// [`Invoker`], and keeps or reverts it by the Metropolis criterion. After
/// `iterations_per_temperature` trials the temperature cools; the run ends
/// when it reaches `min_temperature`.
///
/// The tour is mutated in place and never copied.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_mtsp::anneal::{default_config, Annealer, StopReason};
/// use u_mtsp::distance::DistanceMatrix;
/// use u_mtsp::models::{Depot, TourState};
///
/// let points: Vec<(f64, f64)> = (0..6).map(|x| (x as f64, (x % 2) as f64)).collect();
/// let dm = Arc::new(DistanceMatrix::from_points(&points));
/// let mut tour = TourState::new(
///     dm,
///     vec![Depot::new(0, 2)],
///     vec![vec![vec![5, 1, 3], vec![2, 4]]],
/// )
/// .unwrap();
/// let initial = tour.cost();
///
/// let config = default_config()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.01)
///     .with_iterations_per_temperature(50);
/// let mut rng = u_numflow::random::create_rng(1);
/// let result = Annealer::new(config).unwrap().run(&mut tour, &mut rng, None).unwrap();
///
/// assert_eq!(result.stop_reason, StopReason::Converged);
/// assert_eq!(result.final_cost, tour.cost());
/// assert!(result.final_cost <= initial);
/// ```
#[derive(Debug)]
pub struct Annealer {
    config: SaConfig,
    temperature: f64,
    levels: usize,
    linear_levels: usize,
    trials: usize,
    usage: MoveUsage,
    invoker: Invoker,
}

impl Annealer {
    /// Creates a driver at the schedule's initial temperature.
    pub fn new(config: SaConfig) -> Result<Self, MtspError> {
        validate(&config)?;
        Ok(Self {
            temperature: config.initial_temperature,
            levels: 0,
            linear_levels: linear_levels(&config),
            trials: 0,
            usage: MoveUsage::default(),
            invoker: Invoker::new(),
            config,
        })
    }

    /// The schedule in use.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Temperature levels completed so far.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Trials executed so far.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Accepted trials per move kind so far.
    pub fn usage(&self) -> &MoveUsage {
        &self.usage
    }

    /// `Running` while the temperature is above the floor.
    pub fn phase(&self) -> Phase {
        if self.temperature > self.config.min_temperature {
            Phase::Running
        } else {
            Phase::Converged
        }
    }

    fn budget_spent(&self) -> bool {
        self.config.max_iterations > 0 && self.trials >= self.config.max_iterations
    }

    /// Runs one trial with a uniformly drawn move kind.
    ///
    /// Returns `None` without touching the tour once converged.
    pub fn trial<R: Rng>(&mut self, tour: &mut TourState, rng: &mut R) -> Option<Trial> {
        if self.phase() == Phase::Converged {
            return None;
        }
        let kind = MoveKind::random(rng);
        self.trial_with(kind, tour, rng)
    }

    /// Runs one trial of the given move kind at the current temperature.
    ///
    /// Returns `None` without touching the tour once converged.
    pub fn trial_with<R: Rng>(
        &mut self,
        kind: MoveKind,
        tour: &mut TourState,
        rng: &mut R,
    ) -> Option<Trial> {
        if self.phase() == Phase::Converged {
            return None;
        }
        let cost_before = tour.cost();
        let record = self.invoker.execute(kind, tour, rng);
        let delta = (tour.cost() - cost_before) as f64;

        let accepted = metropolis_accepts(delta, self.temperature, rng);
        if accepted {
            self.invoker.commit(kind);
            self.usage.record(kind);
        } else {
            self.invoker.unexecute(kind, tour);
        }
        self.trials += 1;

        Some(Trial {
            kind,
            record,
            delta,
            accepted,
        })
    }

    /// Runs the trials of one temperature level, then cools.
    ///
    /// Does nothing once converged. If the trial budget runs out mid-level the
    /// temperature is left unchanged.
    pub fn run_level<R: Rng>(&mut self, tour: &mut TourState, rng: &mut R) -> Phase {
        if self.phase() == Phase::Converged {
            return Phase::Converged;
        }

        let mut accepted = 0usize;
        for _ in 0..trials_per_level(&self.config) {
            if self.budget_spent() {
                return self.phase();
            }
            if matches!(self.trial(tour, rng), Some(trial) if trial.accepted) {
                accepted += 1;
            }
        }

        tracing::trace!(
            level = self.levels,
            temperature = self.temperature,
            cost = tour.cost(),
            accepted,
            "temperature level done"
        );

        self.temperature =
            next_temperature(self.temperature, &self.config, self.levels, self.linear_levels);
        self.levels += 1;
        self.phase()
    }

    /// Anneals `tour` until the schedule converges, the budget is spent, or
    /// `cancel` is raised (checked between levels).
    ///
    /// Rejects a tour whose routes do not partition the cities.
    pub fn run<R: Rng>(
        mut self,
        tour: &mut TourState,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<AnnealResult, MtspError> {
        if let Err(violation) = tour.check_partition() {
            tracing::debug!(%violation, "rejecting malformed initial tour");
            return Err(MtspError::Partition(violation));
        }

        let initial_cost = tour.cost();
        tracing::info!(
            initial_cost,
            temperature = self.temperature,
            floor = self.config.min_temperature,
            trials_per_level = trials_per_level(&self.config),
            "annealing started"
        );

        let stop_reason = loop {
            if self.phase() == Phase::Converged {
                break StopReason::Converged;
            }
            if self.budget_spent() {
                break StopReason::IterationLimit;
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                tracing::debug!(level = self.levels, "annealing cancelled");
                break StopReason::Cancelled;
            }
            self.run_level(tour, rng);
        };

        let result = AnnealResult {
            initial_cost,
            final_cost: tour.cost(),
            trials: self.trials,
            temperature_levels: self.levels,
            final_temperature: self.temperature,
            usage: self.usage,
            stop_reason,
        };
        tracing::info!(
            final_cost = result.final_cost,
            trials = result.trials,
            levels = result.temperature_levels,
            stop_reason = ?result.stop_reason,
            "annealing finished"
        );
        Ok(result)
    }
}

/// Anneals `tour` with a generator seeded from `config.seed` (random if unset).
pub fn anneal(tour: &mut TourState, config: &SaConfig) -> Result<AnnealResult, MtspError> {
    anneal_with_cancel(tour, config, None)
}

/// Anneals `tour` with a caller-owned random source.
pub fn anneal_with_rng<R: Rng>(
    tour: &mut TourState,
    config: &SaConfig,
    rng: &mut R,
) -> Result<AnnealResult, MtspError> {
    Annealer::new(config.clone())?.run(tour, rng, None)
}

/// Anneals `tour`, stopping early once `cancel` is raised.
pub fn anneal_with_cancel(
    tour: &mut TourState,
    config: &SaConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<AnnealResult, MtspError> {
    let annealer = Annealer::new(config.clone())?;
    let mut rng = match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    };
    annealer.run(tour, &mut rng, cancel.as_deref())
}
