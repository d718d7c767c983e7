//! Comparing policies on shared random tasks.

use std::fmt;

use pd_behavior::Policy;
use pd_core::{LocationId, RunConfig, SimRng, TrialId};
use pd_spatial::{Route, Router, SpatialError, Topology};
use pd_world::WorldState;
use tracing::debug;

use crate::{NoopObserver, RunSummary, Runner, SimError, SimResult};

// ── PolicyStats ───────────────────────────────────────────────────────────────

/// Accumulated results of one policy across all trials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyStats {
    pub name:         String,
    pub runs:         u32,
    pub total_turns:  u64,
    pub wasted_moves: u64,
    pub capped_runs:  u32,
}

impl PolicyStats {
    fn new(name: &str) -> Self {
        Self {
            name:         name.to_string(),
            runs:         0,
            total_turns:  0,
            wasted_moves: 0,
            capped_runs:  0,
        }
    }

    fn record(&mut self, summary: &RunSummary) {
        self.runs += 1;
        self.total_turns += u64::from(summary.turns);
        self.wasted_moves += u64::from(summary.wasted_moves);
        if summary.capped() {
            self.capped_runs += 1;
        }
    }

    /// Arithmetic mean of turns per run; 0 before any run.
    pub fn average_turns(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.runs)
        }
    }
}

// ── ComparisonReport ──────────────────────────────────────────────────────────

/// Result of [`Comparator::compare`].  Stats are in the order the policies
/// were given; the first one is the baseline for the printed differences.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    pub trials: u32,
    pub stats:  Vec<PolicyStats>,
}

impl ComparisonReport {
    /// Average turns per policy, in input order.
    pub fn averages(&self) -> Vec<f64> {
        self.stats.iter().map(PolicyStats::average_turns).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PolicyStats> {
        self.stats.iter().find(|s| s.name == name)
    }

    pub fn baseline(&self) -> Option<&PolicyStats> {
        self.stats.first()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} trial(s)", self.trials)?;
        writeln!(
            f,
            "{:<16} {:>10}  {:<18} {:>7} {:>7}",
            "policy", "avg turns", "vs first", "wasted", "capped"
        )?;
        let base = self.baseline().map(PolicyStats::average_turns);
        for (i, stats) in self.stats.iter().enumerate() {
            let avg = stats.average_turns();
            let diff = match base {
                Some(base) if i > 0 => difference(avg, base),
                _ => "-".to_string(),
            };
            writeln!(
                f,
                "{:<16} {:>10.2}  {:<18} {:>7} {:>7}",
                stats.name, avg, diff, stats.wasted_moves, stats.capped_runs
            )?;
        }
        Ok(())
    }
}

/// `"+1.50 (+12.0%)"`; the percentage is omitted for a zero baseline.
fn difference(avg: f64, base: f64) -> String {
    let abs = avg - base;
    if base > 0.0 {
        format!("{abs:+.2} ({:+.1}%)", abs / base * 100.0)
    } else {
        format!("{abs:+.2}")
    }
}

// ── Comparator ────────────────────────────────────────────────────────────────

/// Runs several policies on the same sequence of random tasks.
///
/// For every trial one task is drawn and each policy plays its own clone of
/// it, so all policies face identical work.  Per-trial RNGs are derived from
/// the caller's RNG before anything runs, which keeps results identical with
/// and without the `parallel` feature.
pub struct Comparator<'a> {
    runner:       Runner<'a>,
    start:        LocationId,
    parcel_count: usize,
}

impl<'a> Comparator<'a> {
    pub fn new(runner: Runner<'a>, start: LocationId, parcel_count: usize) -> SimResult<Self> {
        if parcel_count == 0 {
            return Err(SimError::Config("parcel_count must be at least 1".into()));
        }
        if !runner.topology().contains(start) {
            return Err(SpatialError::LocationNotFound(start).into());
        }
        Ok(Self { runner, start, parcel_count })
    }

    /// Validate `config`, resolve its start location, and build the runner.
    pub fn from_config(
        topology: &'a Topology,
        router:   &'a dyn Router,
        config:   &RunConfig,
    ) -> SimResult<Self> {
        config.validate()?;
        let runner = Runner::from_config(topology, router, config)?;
        let start = topology.resolve(&config.start)?;
        Self::new(runner, start, config.parcel_count)
    }

    #[inline]
    pub fn runner(&self) -> &Runner<'a> {
        &self.runner
    }

    /// Run every policy on `trials` shared random tasks.
    pub fn compare(
        &self,
        policies: &[&dyn Policy],
        trials:   u32,
        rng:      &mut SimRng,
    ) -> SimResult<ComparisonReport> {
        if policies.is_empty() {
            return Err(SimError::Config("no policies to compare".into()));
        }
        if trials == 0 {
            return Err(SimError::Config("trials must be at least 1".into()));
        }

        let seeds: Vec<(TrialId, SimRng)> = (0..trials)
            .map(|t| (TrialId(t), rng.child(u64::from(t))))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes = seeds
            .into_iter()
            .map(|(trial, trial_rng)| self.run_trial(trial, trial_rng, policies))
            .collect::<SimResult<Vec<_>>>()?;

        #[cfg(feature = "parallel")]
        let outcomes = {
            use rayon::prelude::*;
            seeds
                .into_par_iter()
                .map(|(trial, trial_rng)| self.run_trial(trial, trial_rng, policies))
                .collect::<SimResult<Vec<_>>>()?
        };

        let mut stats: Vec<PolicyStats> =
            policies.iter().map(|p| PolicyStats::new(p.name())).collect();
        for summaries in &outcomes {
            for (s, summary) in stats.iter_mut().zip(summaries) {
                s.record(summary);
            }
        }
        Ok(ComparisonReport { trials, stats })
    }

    /// Average turns of `a` and `b` over `trials` shared tasks.
    pub fn compare_pair(
        &self,
        a:      &dyn Policy,
        b:      &dyn Policy,
        trials: u32,
        rng:    &mut SimRng,
    ) -> SimResult<(f64, f64)> {
        let report = self.compare(&[a, b], trials, rng)?;
        Ok((report.stats[0].average_turns(), report.stats[1].average_turns()))
    }

    /// Draw one task and play every policy on a clone of it.  Each policy
    /// also gets a clone of the trial RNG as it stands after the draw.
    fn run_trial(
        &self,
        trial:    TrialId,
        mut rng:  SimRng,
        policies: &[&dyn Policy],
    ) -> SimResult<Vec<RunSummary>> {
        let task = WorldState::random(
            self.runner.topology(),
            self.parcel_count,
            self.start,
            &mut rng,
        )?;
        let summaries: Vec<RunSummary> = policies
            .iter()
            .map(|policy| {
                let mut policy_rng = rng.clone();
                self.runner.run(task.clone(), *policy, Route::new(), &mut policy_rng, &mut NoopObserver)
            })
            .collect();
        debug!(
            %trial,
            turns = ?summaries.iter().map(|s| s.turns).collect::<Vec<_>>(),
            "trial finished"
        );
        Ok(summaries)
    }
}
