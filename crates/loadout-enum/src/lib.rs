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

//! Loadout-Enum: exhaustive 4-subset enumeration
//!
//! The exact strategy of the engine. Every 4-subset of the module pool is
//! addressed by its rank in `[0, C(n, 4))`, the rank space is cut into
//! batches, and a worker pool scores the batches while the dispatcher
//! merges ready results into a bounded top-K collector.
//!
//! Core flow
//! - Compute the rank-space size and a batch size clamped between a floor
//!   (so tiny pools do not drown in task overhead) and a ceiling (so one
//!   batch's result vector cannot blow up memory).
//! - Share the module pool and constraints with the workers via `Arc`.
//! - Each batch unranks its range in ascending order, applies the hard
//!   minimum-sum pre-filter, and scores the survivors.
//! - The dispatcher polls handles without blocking (1 ms naps when
//!   nothing is ready) so merging never serializes behind the slowest
//!   batch; a panicked worker fails the whole call.
//!
//! Determinism: given the same pool and constraints, the surviving scores
//! are deterministic; only the order among equal scores may vary with
//! batch arrival order.

pub mod enumerate;

pub use enumerate::{EnumerationConfig, enumerate};
