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

//! Loadout-Search: shared infrastructure for the search strategies
//!
//! Both the exhaustive enumeration and the greedy/local-search heuristic
//! are built from the same ingredients: the combat-power tables, the
//! hot-path evaluator, a bounded top-K collector, a worker pool with
//! pollable task handles, and monitors/statistics for observing a run.
//! This crate owns those ingredients so the strategy crates stay focused
//! on their search logic.
//!
//! Module map
//! - `tables`: the immutable combat-power constants (thresholds, per-level
//!   powers, special-attribute classification, dense total-power table).
//! - `eval`: scoring over module indices (hot path) and over attribute
//!   names (hydration/breakdown path).
//! - `topk`: bounded min-heap keeping the K best candidates seen.
//! - `pool`: fixed-size worker pool; tasks return values through
//!   non-blocking `TaskHandle`s.
//! - `monitor`: progress observers (`NoOpMonitor`, stdout `LogMonitor`).
//! - `stats`: lightweight counters and timing for one optimization call.
//! - `error`: error types shared across the strategies.

pub mod error;
pub mod eval;
pub mod monitor;
pub mod pool;
pub mod stats;
pub mod tables;
pub mod topk;
