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

//! Loadout-LS: randomized greedy construction with local search
//!
//! The sampling strategy of the engine, for pools where `C(n, 4)` scoring
//! passes are no longer affordable. Each attempt builds a candidate
//! greedily (with a controlled amount of randomness to diversify across
//! attempts), polishes it with a first-improvement local search, and
//! deduplicates against everything accepted so far.
//!
//! Module map
//! - `greedy`: randomized greedy construction (argmax with probability
//!   0.8, otherwise a uniform pick among the top three).
//! - `local_search`: first-improvement swap search with per-position
//!   neighborhood sampling and an early-out once improvements dry up.
//! - `optimize`: the attempt/dedup driver and hydration of the accepted
//!   solutions.
//!
//! Randomness is injected as `R: Rng` so callers own seeding; the facade
//! seeds per invocation and no reproducibility across runs is promised.

pub mod greedy;
pub mod local_search;
pub mod optimize;

pub use optimize::{OptimizeConfig, optimize};
