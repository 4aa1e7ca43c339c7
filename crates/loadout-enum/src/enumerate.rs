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

use loadout_core::math::binomial::{binomial, unrank_combination};
use loadout_model::constraints::Constraints;
use loadout_model::module::ModuleInfo;
use loadout_model::solution::{LightweightSolution, ModuleSolution};
use loadout_search::error::{EvalError, SolverError};
use loadout_search::eval::{hydrate_solution, score_by_indices};
use loadout_search::monitor::SearchMonitor;
use loadout_search::pool::{TaskHandle, TaskPoll, WorkerPool};
use loadout_search::stats::SearchStatistics;
use loadout_search::topk::TopK;
use smallvec::SmallVec;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default number of solutions returned.
pub const DEFAULT_MAX_SOLUTIONS: usize = 60;

/// Default number of worker threads.
pub const DEFAULT_NUM_WORKERS: usize = 8;

/// Subset size of every enumerated combination.
const COMBINATION_SIZE: usize = 4;

/// Lower clamp of the batch size, so small pools do not pay task
/// overhead per handful of combinations.
const MIN_BATCH_SIZE: u64 = 1000;

/// Upper clamp of the batch size, capping the size of one in-flight
/// batch result vector.
const MAX_BATCH_SIZE: u64 = 653_536;

/// Nap length of the dispatcher when no batch is ready.
const POLL_SLEEP: Duration = Duration::from_millis(1);

/// Configuration of the enumeration strategy.
///
/// # Examples
///
/// ```rust
/// # use loadout_enum::EnumerationConfig;
///
/// let config = EnumerationConfig::new()
///     .with_max_solutions(10)
///     .with_num_workers(2);
/// assert_eq!(config.max_solutions(), 10);
/// assert_eq!(config.num_workers(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    max_solutions: usize,
    num_workers: usize,
}

impl Default for EnumerationConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl EnumerationConfig {
    /// Creates the default configuration (60 solutions, 8 workers).
    #[inline]
    pub fn new() -> Self {
        Self {
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            num_workers: DEFAULT_NUM_WORKERS,
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
            "called `EnumerationConfig::with_max_solutions` with zero"
        );
        self.max_solutions = max_solutions;
        self
    }

    /// Sets the worker-thread count.
    ///
    /// # Panics
    ///
    /// Panics if `num_workers` is zero.
    pub fn with_num_workers(mut self, num_workers: usize) -> Self {
        assert!(
            num_workers > 0,
            "called `EnumerationConfig::with_num_workers` with zero"
        );
        self.num_workers = num_workers;
        self
    }

    /// Returns the maximum number of solutions returned.
    #[inline]
    pub fn max_solutions(&self) -> usize {
        self.max_solutions
    }

    /// Returns the worker-thread count.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}

/// The result vector of one scored batch.
struct BatchOutcome {
    solutions: Vec<LightweightSolution>,
    scanned: u64,
    filtered: u64,
}

/// Evaluates every 4-subset of `modules` and returns the top-scoring
/// selections, sorted by score descending.
///
/// Combinations failing any minimum-sum requirement are discarded before
/// scoring. Pools with fewer than four modules yield an empty result.
///
/// # Errors
///
/// Returns [`SolverError::Evaluation`] when a combination violates the
/// scoring tables' domain and [`SolverError::WorkerPanicked`] when a
/// worker thread dies; in both cases no partial results are returned.
pub fn enumerate(
    modules: &[ModuleInfo],
    constraints: &Constraints,
    config: &EnumerationConfig,
    monitor: &mut dyn SearchMonitor,
) -> Result<Vec<ModuleSolution>, SolverError> {
    let start_time = Instant::now();
    let mut statistics = SearchStatistics::new();

    let n = modules.len();
    if n < COMBINATION_SIZE {
        statistics.set_solve_duration(start_time.elapsed());
        monitor.on_finish(&statistics);
        return Ok(Vec::new());
    }

    let total_combinations = binomial(n as u64, COMBINATION_SIZE as u64);
    let batch_size = (total_combinations / (config.num_workers as u64 * 4))
        .clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
    let num_batches = total_combinations.div_ceil(batch_size);

    let shared_modules: Arc<Vec<ModuleInfo>> = Arc::new(modules.to_vec());
    let shared_constraints: Arc<Constraints> = Arc::new(constraints.clone());

    let pool = WorkerPool::new(config.num_workers);
    let mut pending: Vec<TaskHandle<Result<BatchOutcome, EvalError>>> =
        Vec::with_capacity(num_batches as usize);

    for batch_index in 0..num_batches {
        let range_start = batch_index * batch_size;
        let range_end = (range_start + batch_size).min(total_combinations);
        let modules = Arc::clone(&shared_modules);
        let constraints = Arc::clone(&shared_constraints);

        pending.push(pool.submit(move || {
            process_rank_range(range_start, range_end, n, &modules, &constraints)
        }));
    }

    let total_batches = pending.len();
    let mut completed_batches = 0;
    let mut collector = TopK::new(config.max_solutions);

    while !pending.is_empty() {
        let mut any_ready = false;

        let mut index = 0;
        while index < pending.len() {
            match pending[index].poll() {
                TaskPoll::Ready(outcome) => {
                    let outcome = outcome.map_err(SolverError::from)?;
                    statistics.on_scanned(outcome.scanned);
                    statistics.on_filtered(outcome.filtered);
                    for solution in outcome.solutions {
                        collector.offer(solution);
                    }

                    completed_batches += 1;
                    monitor.on_batch_complete(
                        completed_batches,
                        total_batches,
                        collector.best_score(),
                    );

                    pending.swap_remove(index);
                    any_ready = true;
                }
                TaskPoll::Panicked => return Err(SolverError::WorkerPanicked),
                TaskPoll::Pending => index += 1,
            }
        }

        if !any_ready && !pending.is_empty() {
            std::thread::sleep(POLL_SLEEP);
        }
    }

    let ranked = collector.into_sorted_desc();
    let mut results = Vec::with_capacity(ranked.len());
    for lightweight in &ranked {
        results.push(hydrate_solution(lightweight, modules)?);
        statistics.on_solution();
    }

    statistics.set_solve_duration(start_time.elapsed());
    monitor.on_finish(&statistics);
    Ok(results)
}

/// Unranks, filters, and scores one contiguous rank range.
///
/// Solutions are emitted in ascending rank order.
fn process_rank_range(
    range_start: u64,
    range_end: u64,
    n: usize,
    modules: &[ModuleInfo],
    constraints: &Constraints,
) -> Result<BatchOutcome, EvalError> {
    let mut solutions = Vec::with_capacity((range_end - range_start) as usize);
    let mut filtered = 0_u64;
    let mut subset = [0_usize; COMBINATION_SIZE];

    for rank in range_start..range_end {
        unrank_combination(n, COMBINATION_SIZE, rank, &mut subset);

        if constraints.has_min_attr_sums() && !meets_min_attr_sums(&subset, modules, constraints) {
            filtered += 1;
            continue;
        }

        let score = score_by_indices(&subset, modules, constraints.preferences())?;
        solutions.push(LightweightSolution::new(
            SmallVec::from_slice(&subset),
            score,
        ));
    }

    Ok(BatchOutcome {
        solutions,
        scanned: range_end - range_start,
        filtered,
    })
}

/// Checks a combination against every minimum-sum requirement.
fn meets_min_attr_sums(
    subset: &[usize],
    modules: &[ModuleInfo],
    constraints: &Constraints,
) -> bool {
    for (&attr_id, &required_sum) in constraints.min_attr_sums() {
        let mut sum = 0_i32;
        for &module_index in subset {
            for part in modules[module_index].parts() {
                if part.id() == attr_id {
                    sum += part.value();
                }
            }
        }
        if sum < required_sum {
            return false;
        }
    }
    true
}
