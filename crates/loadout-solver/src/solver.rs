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

use loadout_core::math::binomial::binomial;
use loadout_enum::EnumerationConfig;
use loadout_ls::OptimizeConfig;
use loadout_model::constraints::{AttrPreferences, Constraints};
use loadout_model::module::ModuleInfo;
use loadout_model::solution::ModuleSolution;
use loadout_search::error::SolverError;
use loadout_search::monitor::{LogMonitor, NoOpMonitor, SearchMonitor};
use rand::Rng;
use std::time::Duration;

/// Default rank-space budget below which `solve` enumerates exhaustively.
pub const DEFAULT_ENUMERATION_BUDGET: u64 = 10_000_000;

/// The configured optimizer facade.
///
/// Build one with [`SolverBuilder`]; the defaults are part of the
/// engine's contract (60 solutions, 8 workers, 20x attempt budget, 30
/// local-search rounds).
///
/// # Examples
///
/// ```rust
/// # use loadout_model::constraints::Constraints;
/// # use loadout_model::index::AttrId;
/// # use loadout_model::module::{ModuleInfo, ModulePart};
/// # use loadout_solver::solver::SolverBuilder;
///
/// let module = ModuleInfo::new(
///     "基础攻击",
///     5500101,
///     1,
///     3,
///     vec![ModulePart::new(AttrId::new(1110), "力量加持", 1)],
/// );
/// let modules = vec![module.clone(), module.clone(), module.clone(), module];
///
/// let solver = SolverBuilder::new().with_workers(2).build();
/// let solutions = solver.enumerate(&modules, &Constraints::new()).unwrap();
/// assert_eq!(solutions[0].score(), 37);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    max_solutions: usize,
    num_workers: usize,
    attempts_multiplier: usize,
    local_search_iterations: usize,
    enumeration_budget: u64,
    log_interval: Option<Duration>,
}

impl Solver {
    fn make_monitor(&self) -> Box<dyn SearchMonitor> {
        match self.log_interval {
            Some(interval) => Box::new(LogMonitor::new(interval)),
            None => Box::new(NoOpMonitor),
        }
    }

    /// Returns the maximum number of solutions returned per call.
    #[inline]
    pub fn max_solutions(&self) -> usize {
        self.max_solutions
    }

    /// Returns the worker-thread count used by enumeration.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the rank-space budget of the automatic dispatch.
    #[inline]
    pub fn enumeration_budget(&self) -> u64 {
        self.enumeration_budget
    }

    /// Exhaustively evaluates every 4-subset of `modules`, honoring
    /// preferences and minimum-sum requirements.
    ///
    /// Returns up to the configured number of solutions sorted by score
    /// descending; pools with fewer than four modules yield an empty
    /// result.
    pub fn enumerate(
        &self,
        modules: &[ModuleInfo],
        constraints: &Constraints,
    ) -> Result<Vec<ModuleSolution>, SolverError> {
        let config = EnumerationConfig::new()
            .with_max_solutions(self.max_solutions)
            .with_num_workers(self.num_workers);
        let mut monitor = self.make_monitor();
        loadout_enum::enumerate(modules, constraints, &config, monitor.as_mut())
    }

    /// Samples solutions by randomized greedy construction plus local
    /// search, honoring preferences only.
    ///
    /// The generator is seeded per invocation; results are not
    /// reproducible across runs. Use [`Solver::optimize_with_rng`] to
    /// control seeding.
    pub fn optimize(
        &self,
        modules: &[ModuleInfo],
        preferences: &AttrPreferences,
    ) -> Result<Vec<ModuleSolution>, SolverError> {
        let mut rng = rand::rng();
        self.optimize_with_rng(modules, preferences, &mut rng)
    }

    /// Like [`Solver::optimize`], with a caller-supplied generator.
    pub fn optimize_with_rng<R>(
        &self,
        modules: &[ModuleInfo],
        preferences: &AttrPreferences,
        rng: &mut R,
    ) -> Result<Vec<ModuleSolution>, SolverError>
    where
        R: Rng + ?Sized,
    {
        let config = OptimizeConfig::new()
            .with_max_solutions(self.max_solutions)
            .with_attempts_multiplier(self.attempts_multiplier)
            .with_local_search_iterations(self.local_search_iterations);
        let mut monitor = self.make_monitor();
        loadout_ls::optimize(modules, preferences, &config, rng, monitor.as_mut())
    }

    /// Picks a strategy automatically: enumeration while the 4-subset
    /// space fits the configured budget, the heuristic otherwise.
    ///
    /// Minimum-sum requirements force enumeration regardless of pool
    /// size, since the heuristic cannot honor them.
    pub fn solve(
        &self,
        modules: &[ModuleInfo],
        constraints: &Constraints,
    ) -> Result<Vec<ModuleSolution>, SolverError> {
        let total_combinations = binomial(modules.len() as u64, 4);
        if constraints.has_min_attr_sums() || total_combinations <= self.enumeration_budget {
            self.enumerate(modules, constraints)
        } else {
            self.optimize(modules, constraints.preferences())
        }
    }
}

/// Builder for [`Solver`].
#[derive(Debug, Clone)]
pub struct SolverBuilder {
    max_solutions: usize,
    num_workers: usize,
    attempts_multiplier: usize,
    local_search_iterations: usize,
    enumeration_budget: u64,
    log_interval: Option<Duration>,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    /// Creates a builder holding the contract defaults.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_solutions: loadout_enum::enumerate::DEFAULT_MAX_SOLUTIONS,
            num_workers: loadout_enum::enumerate::DEFAULT_NUM_WORKERS,
            attempts_multiplier: loadout_ls::optimize::DEFAULT_ATTEMPTS_MULTIPLIER,
            local_search_iterations: loadout_ls::optimize::DEFAULT_LOCAL_SEARCH_ITERATIONS,
            enumeration_budget: DEFAULT_ENUMERATION_BUDGET,
            log_interval: None,
        }
    }

    /// Sets the maximum number of solutions returned per call.
    #[inline]
    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    /// Sets the worker-thread count used by enumeration.
    #[inline]
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Sets the heuristic attempt-budget multiplier.
    #[inline]
    pub fn with_attempts_multiplier(mut self, attempts_multiplier: usize) -> Self {
        self.attempts_multiplier = attempts_multiplier;
        self
    }

    /// Sets the heuristic local-search round cap.
    #[inline]
    pub fn with_local_search_iterations(mut self, local_search_iterations: usize) -> Self {
        self.local_search_iterations = local_search_iterations;
        self
    }

    /// Sets the rank-space budget of the automatic dispatch.
    #[inline]
    pub fn with_enumeration_budget(mut self, enumeration_budget: u64) -> Self {
        self.enumeration_budget = enumeration_budget;
        self
    }

    /// Enables throttled progress logging to stdout.
    #[inline]
    pub fn with_progress_logging(mut self, log_interval: Duration) -> Self {
        self.log_interval = Some(log_interval);
        self
    }

    /// Builds the configured solver.
    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            max_solutions: self.max_solutions,
            num_workers: self.num_workers,
            attempts_multiplier: self.attempts_multiplier,
            local_search_iterations: self.local_search_iterations,
            enumeration_budget: self.enumeration_budget,
            log_interval: self.log_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_model::index::AttrId;
    use loadout_model::module::ModulePart;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn strength_module(uuid: i32, value: i32) -> ModuleInfo {
        ModuleInfo::new(
            "基础攻击",
            5500101,
            uuid,
            3,
            vec![ModulePart::new(AttrId::new(1110), "力量加持", value)],
        )
    }

    fn quad_pool() -> Vec<ModuleInfo> {
        (0..4).map(|uuid| strength_module(uuid, 1)).collect()
    }

    fn test_solver() -> Solver {
        SolverBuilder::new().with_workers(2).build()
    }

    #[test]
    fn test_builder_defaults_match_the_contract() {
        let solver = SolverBuilder::new().build();
        assert_eq!(solver.max_solutions(), 60);
        assert_eq!(solver.num_workers(), 8);
        assert_eq!(solver.enumeration_budget(), DEFAULT_ENUMERATION_BUDGET);
    }

    #[test]
    fn test_enumerate_small_pool_is_empty() {
        let modules: Vec<ModuleInfo> = (0..3).map(|uuid| strength_module(uuid, 1)).collect();
        let solutions = test_solver()
            .enumerate(&modules, &Constraints::new())
            .expect("enumerate");
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_enumerate_threshold_boundary() {
        let solutions = test_solver()
            .enumerate(&quad_pool(), &Constraints::new())
            .expect("enumerate");
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].score(), 37);
    }

    #[test]
    fn test_enumerate_with_target_and_exclude() {
        let targeted = Constraints::new()
            .with_preferences(AttrPreferences::new().with_targets([AttrId::new(1110)]));
        let excluded = Constraints::new()
            .with_preferences(AttrPreferences::new().with_excludes([AttrId::new(1110)]));

        let solver = test_solver();
        assert_eq!(
            solver.enumerate(&quad_pool(), &targeted).unwrap()[0].score(),
            51
        );
        assert_eq!(
            solver.enumerate(&quad_pool(), &excluded).unwrap()[0].score(),
            23
        );
    }

    #[test]
    fn test_enumerate_with_min_sum_requirement() {
        let constraints = Constraints::new().with_min_attr_sum(AttrId::new(1110), 5);
        let solutions = test_solver()
            .enumerate(&quad_pool(), &constraints)
            .expect("enumerate");
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_optimize_returns_sorted_unique_solutions() {
        let modules: Vec<ModuleInfo> = (0..10)
            .map(|uuid| strength_module(uuid, (uuid % 3) + 1))
            .collect();

        let solver = SolverBuilder::new().with_max_solutions(8).build();
        let mut rng = ChaCha8Rng::seed_from_u64(314);
        let solutions = solver
            .optimize_with_rng(&modules, &AttrPreferences::new(), &mut rng)
            .expect("optimize");

        assert!(!solutions.is_empty());
        assert!(solutions.len() <= 8);
        for window in solutions.windows(2) {
            assert!(window[0].score() >= window[1].score());
        }
    }

    #[test]
    fn test_heuristic_matches_enumeration_on_a_small_pool() {
        let modules: Vec<ModuleInfo> = (0..9)
            .map(|uuid| strength_module(uuid, (uuid % 4) + 1))
            .collect();
        let solver = SolverBuilder::new().with_workers(2).with_max_solutions(30).build();

        let exhaustive = solver.enumerate(&modules, &Constraints::new()).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let sampled = solver
            .optimize_with_rng(&modules, &AttrPreferences::new(), &mut rng)
            .unwrap();

        assert_eq!(sampled[0].score(), exhaustive[0].score());
    }

    #[test]
    fn test_solve_enumerates_within_the_budget() {
        // With 4 modules the space is a single combination; solve must
        // behave exactly like enumerate.
        let solutions = test_solver()
            .solve(&quad_pool(), &Constraints::new())
            .expect("solve");
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].score(), 37);
    }

    #[test]
    fn test_solve_falls_back_to_the_heuristic_beyond_the_budget() {
        let modules: Vec<ModuleInfo> = (0..12)
            .map(|uuid| strength_module(uuid, (uuid % 3) + 1))
            .collect();

        // C(12, 4) = 495 > 100, so the heuristic path runs; it cannot
        // enumerate all 495 combinations but must still return sorted
        // unique solutions.
        let solver = SolverBuilder::new()
            .with_workers(2)
            .with_max_solutions(5)
            .with_enumeration_budget(100)
            .build();

        let solutions = solver.solve(&modules, &Constraints::new()).expect("solve");
        assert!(!solutions.is_empty());
        assert!(solutions.len() <= 5);
        for window in solutions.windows(2) {
            assert!(window[0].score() >= window[1].score());
        }
    }

    #[test]
    fn test_solve_forces_enumeration_for_min_sum_requirements() {
        let modules: Vec<ModuleInfo> = (0..12)
            .map(|uuid| strength_module(uuid, (uuid % 3) + 1))
            .collect();

        // The budget alone would pick the heuristic, but the requirement
        // needs the pre-filter of the enumeration path; every returned
        // combination must satisfy it.
        let solver = SolverBuilder::new()
            .with_workers(2)
            .with_max_solutions(10)
            .with_enumeration_budget(100)
            .build();

        let constraints = Constraints::new().with_min_attr_sum(AttrId::new(1110), 9);
        let solutions = solver.solve(&modules, &constraints).expect("solve");

        assert!(!solutions.is_empty());
        for solution in &solutions {
            assert!(solution.attr_breakdown()["力量加持"] >= 9);
        }
    }

    #[test]
    fn test_enumeration_is_deterministic_across_calls() {
        let modules: Vec<ModuleInfo> = (0..8)
            .map(|uuid| strength_module(uuid, (uuid % 4) + 1))
            .collect();
        let solver = test_solver();

        let first = solver.enumerate(&modules, &Constraints::new()).unwrap();
        let second = solver.enumerate(&modules, &Constraints::new()).unwrap();

        let first_scores: Vec<i32> = first.iter().map(ModuleSolution::score).collect();
        let second_scores: Vec<i32> = second.iter().map(ModuleSolution::score).collect();
        assert_eq!(first_scores, second_scores);
    }
}
