// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::greedy::construct;
use crate::local_search::improve;
use loadout_model::constraints::AttrPreferences;
use loadout_model::module::ModuleInfo;
use loadout_model::solution::{LightweightSolution, ModuleSolution, SOLUTION_SIZE};
use loadout_search::error::SolverError;
use loadout_search::eval::hydrate_solution;
use loadout_search::monitor::SearchMonitor;
use loadout_search::stats::SearchStatistics;
use rand::Rng;
use smallvec::SmallVec;
use std::collections::HashSet;
use std::time::Instant;

/// Default number of solutions returned.
pub const DEFAULT_MAX_SOLUTIONS: usize = 60;

/// Default multiplier bounding the attempt budget at
/// `attempts_multiplier * max_solutions`.
pub const DEFAULT_ATTEMPTS_MULTIPLIER: usize = 20;

/// Default local-search round cap per attempt.
pub const DEFAULT_LOCAL_SEARCH_ITERATIONS: usize = 30;

/// Configuration of the heuristic strategy.
///
/// # Examples
///
/// ```rust
/// # use loadout_ls::OptimizeConfig;
///
/// let config = OptimizeConfig::new()
///     .with_max_solutions(5)
///     .with_attempts_multiplier(10)
///     .with_local_search_iterations(15);
/// assert_eq!(config.max_solutions(), 5);
/// assert_eq!(config.max_attempts(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeConfig {
    max_solutions: usize,
    attempts_multiplier: usize,
    local_search_iterations: usize,
}

impl Default for OptimizeConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizeConfig {
    /// Creates the default configuration (60 solutions, 20x attempt
    /// budget, 30 local-search rounds).
    #[inline]
    pub fn new() -> Self {
        Self {
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            attempts_multiplier: DEFAULT_ATTEMPTS_MULTIPLIER,
            local_search_iterations: DEFAULT_LOCAL_SEARCH_ITERATIONS,
        }
    }

    /// Sets the maximum number of solutions returned.
    ///
    /// # Panics
    ///
    /// Panics if `max_solutions` is zero.
    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        assert!(
            max_solutions > 0,
            "called `OptimizeConfig::with_max_solutions` with zero"
        );
        self.max_solutions = max_solutions;
        self
    }

    /// Sets the attempt-budget multiplier.
    pub fn with_attempts_multiplier(mut self, attempts_multiplier: usize) -> Self {
        self.attempts_multiplier = attempts_multiplier;
        self
    }

    /// Sets the local-search round cap per attempt.
    pub fn with_local_search_iterations(mut self, local_search_iterations: usize) -> Self {
        self.local_search_iterations = local_search_iterations;
        self
    }

    /// Returns the maximum number of solutions returned.
    #[inline]
    pub fn max_solutions(&self) -> usize {
        self.max_solutions
    }

    /// Returns the attempt-budget multiplier.
    #[inline]
    pub fn attempts_multiplier(&self) -> usize {
        self.attempts_multiplier
    }

    /// Returns the local-search round cap per attempt.
    #[inline]
    pub fn local_search_iterations(&self) -> usize {
        self.local_search_iterations
    }

    /// Returns the total attempt budget.
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.max_solutions * self.attempts_multiplier
    }
}

/// Collects up to K unique solutions by randomized greedy construction
/// plus local search, sorted by score descending.
///
/// Attempts run until K unique (by canonicalized index tuple) solutions
/// are collected or the attempt budget `M * K` is exhausted. An empty
/// module pool yields an empty result.
///
/// # Errors
///
/// Returns [`SolverError::Evaluation`] when a candidate violates the
/// scoring tables' domain; no partial results are returned.
pub fn optimize<R>(
    modules: &[ModuleInfo],
    preferences: &AttrPreferences,
    config: &OptimizeConfig,
    rng: &mut R,
    monitor: &mut dyn SearchMonitor,
) -> Result<Vec<ModuleSolution>, SolverError>
where
    R: Rng + ?Sized,
{
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new();

    if modules.is_empty() {
        statistics.set_solve_duration(start_time.elapsed());
        monitor.on_finish(&statistics);
        return Ok(Vec::new());
    }

    let max_attempts = config.max_attempts();
    let mut seen: HashSet<SmallVec<[usize; SOLUTION_SIZE]>> = HashSet::new();
    let mut accepted: Vec<LightweightSolution> = Vec::with_capacity(config.max_solutions);

    let mut attempts = 0_usize;
    while accepted.len() < config.max_solutions && attempts < max_attempts {
        attempts += 1;
        statistics.on_attempt();

        let constructed = construct(modules, preferences, rng)?;
        let polished = improve(
            constructed,
            modules,
            config.local_search_iterations,
            preferences,
            rng,
        )?;

        if seen.insert(polished.canonical_indices()) {
            statistics.on_solution();
            accepted.push(polished);
        }

        monitor.on_attempt(attempts as u64, accepted.len());
    }

    accepted.sort_unstable_by(|a, b| b.score().cmp(&a.score()));

    let mut results = Vec::with_capacity(accepted.len());
    for lightweight in &accepted {
        results.push(hydrate_solution(lightweight, modules)?);
    }

    statistics.set_solve_duration(start_time.elapsed());
    monitor.on_finish(&statistics);
    Ok(results)
}
