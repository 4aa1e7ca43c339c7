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

use std::time::Duration;

/// Lightweight counters and timing for one optimization call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Combinations unranked and inspected.
    pub combinations_scanned: u64,
    /// Combinations discarded by hard pre-filters before scoring.
    pub candidates_filtered: u64,
    /// Construction attempts made by the heuristic strategy.
    pub attempts: u64,
    /// Unique solutions collected.
    pub solutions_found: u64,
    /// Wall-clock duration of the call.
    pub solve_duration: Duration,
}

impl SearchStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `count` inspected combinations.
    #[inline]
    pub fn on_scanned(&mut self, count: u64) {
        self.combinations_scanned += count;
    }

    /// Records `count` combinations removed by a pre-filter.
    #[inline]
    pub fn on_filtered(&mut self, count: u64) {
        self.candidates_filtered += count;
    }

    /// Records one heuristic construction attempt.
    #[inline]
    pub fn on_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Records one collected solution.
    #[inline]
    pub fn on_solution(&mut self) {
        self.solutions_found += 1;
    }

    /// Sets the wall-clock duration of the call.
    #[inline]
    pub fn set_solve_duration(&mut self, duration: Duration) {
        self.solve_duration = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics")?;
        writeln!(f, "   Combinations scanned: {}", self.combinations_scanned)?;
        writeln!(f, "   Candidates filtered:  {}", self.candidates_filtered)?;
        writeln!(f, "   Attempts:             {}", self.attempts)?;
        writeln!(f, "   Solutions found:      {}", self.solutions_found)?;
        write!(
            f,
            "   Duration:             {:.3}s",
            self.solve_duration.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = SearchStatistics::new();
        stats.on_scanned(100);
        stats.on_scanned(50);
        stats.on_filtered(3);
        stats.on_attempt();
        stats.on_attempt();
        stats.on_solution();
        stats.set_solve_duration(Duration::from_millis(250));

        assert_eq!(stats.combinations_scanned, 150);
        assert_eq!(stats.candidates_filtered, 3);
        assert_eq!(stats.attempts, 2);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.solve_duration, Duration::from_millis(250));
    }

    #[test]
    fn test_display_contains_the_counters() {
        let mut stats = SearchStatistics::new();
        stats.on_scanned(42);
        let rendered = format!("{}", stats);
        assert!(rendered.contains("42"));
        assert!(rendered.contains("Duration"));
    }
}
