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

//! Progress observers for long-running optimization calls.
//!
//! Strategies report coarse-grained events (a batch finished, an attempt
//! completed, the call is done). The default observer ignores everything;
//! the log observer prints throttled progress lines to stdout.

use crate::stats::SearchStatistics;
use std::time::{Duration, Instant};

/// Observer interface for search progress.
///
/// All methods have empty default implementations so observers only
/// override the events they care about.
pub trait SearchMonitor {
    /// A human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Called by the enumeration dispatcher each time a batch drains.
    fn on_batch_complete(&mut self, completed: usize, total: usize, best_score: Option<i32>) {
        let _ = (completed, total, best_score);
    }

    /// Called by the heuristic after each construction attempt.
    fn on_attempt(&mut self, attempt: u64, unique_found: usize) {
        let _ = (attempt, unique_found);
    }

    /// Called once when a strategy finishes.
    fn on_finish(&mut self, statistics: &SearchStatistics) {
        let _ = statistics;
    }
}

/// A monitor that observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}

/// A monitor that prints throttled progress lines to stdout.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
}

impl LogMonitor {
    /// Creates a log monitor emitting at most one line per
    /// `log_interval`.
    pub fn new(log_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
        }
    }

    #[inline]
    fn should_log(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_log_time) < self.log_interval {
            return false;
        }
        self.last_log_time = now;
        true
    }

    #[inline]
    fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_batch_complete(&mut self, completed: usize, total: usize, best_score: Option<i32>) {
        if !self.should_log() && completed != total {
            return;
        }

        match best_score {
            Some(score) => println!(
                "[{:8.2}s] batches {:>6}/{} | best {}",
                self.elapsed_secs(),
                completed,
                total,
                score
            ),
            None => println!(
                "[{:8.2}s] batches {:>6}/{} | best -",
                self.elapsed_secs(),
                completed,
                total
            ),
        }
    }

    fn on_attempt(&mut self, attempt: u64, unique_found: usize) {
        if !self.should_log() {
            return;
        }

        println!(
            "[{:8.2}s] attempts {:>6} | unique {}",
            self.elapsed_secs(),
            attempt,
            unique_found
        );
    }

    fn on_finish(&mut self, statistics: &SearchStatistics) {
        println!("[{:8.2}s] done", self.elapsed_secs());
        println!("{}", statistics);
    }
}
