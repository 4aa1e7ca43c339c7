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

//! Bounded top-K collection.
//!
//! Millions of candidates stream out of the batch workers but only the K
//! best ever matter. The collector is a min-heap of capacity K with the
//! push-or-replace-min admission rule, so memory stays proportional to K
//! while admission stays O(log K) — the alternative of accumulating every
//! candidate score and sorting would dwarf the scoring work itself.

use loadout_model::solution::LightweightSolution;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A bounded min-heap keeping the K highest-scoring solutions offered.
///
/// Ties between equally-scored solutions resolve by arrival order against
/// the current minimum: a candidate must *strictly* beat the minimum to
/// displace it.
///
/// # Examples
///
/// ```rust
/// # use loadout_model::solution::LightweightSolution;
/// # use loadout_search::topk::TopK;
/// # use smallvec::smallvec;
///
/// let mut collector = TopK::new(2);
/// collector.offer(LightweightSolution::new(smallvec![0, 1, 2, 3], 10));
/// collector.offer(LightweightSolution::new(smallvec![0, 1, 2, 4], 30));
/// collector.offer(LightweightSolution::new(smallvec![0, 1, 2, 5], 20));
///
/// let ranked = collector.into_sorted_desc();
/// let scores: Vec<i32> = ranked.iter().map(|s| s.score()).collect();
/// assert_eq!(scores, vec![30, 20]);
/// ```
#[derive(Debug)]
pub struct TopK {
    heap: BinaryHeap<Reverse<LightweightSolution>>,
    capacity: usize,
}

impl TopK {
    /// Creates a collector that retains at most `capacity` solutions.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "called `TopK::new` with zero capacity");

        Self {
            heap: BinaryHeap::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Offers a candidate. Returns `true` if it was admitted.
    ///
    /// While below capacity every candidate is admitted; at capacity the
    /// candidate replaces the current minimum iff its score strictly
    /// exceeds it.
    pub fn offer(&mut self, candidate: LightweightSolution) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(candidate));
            return true;
        }

        match self.heap.peek() {
            Some(Reverse(minimum)) if candidate.score() > minimum.score() => {
                self.heap.pop();
                self.heap.push(Reverse(candidate));
                true
            }
            _ => false,
        }
    }

    /// Returns the number of retained solutions.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no solution has been admitted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the score of the weakest retained solution.
    #[inline]
    pub fn min_score(&self) -> Option<i32> {
        self.heap.peek().map(|Reverse(solution)| solution.score())
    }

    /// Returns the score of the strongest retained solution.
    #[inline]
    pub fn best_score(&self) -> Option<i32> {
        self.heap
            .iter()
            .map(|Reverse(solution)| solution.score())
            .max()
    }

    /// Consumes the collector, yielding the retained solutions sorted by
    /// score descending.
    pub fn into_sorted_desc(mut self) -> Vec<LightweightSolution> {
        let mut ascending = Vec::with_capacity(self.heap.len());
        while let Some(Reverse(solution)) = self.heap.pop() {
            ascending.push(solution);
        }
        ascending.reverse();
        ascending
    }
}
