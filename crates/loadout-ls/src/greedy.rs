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

//! Randomized greedy construction.
//!
//! A pure argmax construction would funnel every attempt into the same
//! handful of local optima. Mixing in a 20% chance of picking uniformly
//! among the top three candidates keeps construction quality high while
//! giving the attempt loop enough diversity to collect K distinct
//! solutions.

use fixedbitset::FixedBitSet;
use loadout_model::constraints::AttrPreferences;
use loadout_model::module::ModuleInfo;
use loadout_model::solution::{LightweightSolution, SOLUTION_SIZE};
use loadout_search::error::EvalError;
use loadout_search::eval::score_by_indices;
use rand::Rng;
use smallvec::SmallVec;

/// Probability of taking the best-scoring candidate at each step.
const BEST_PICK_PROBABILITY: f64 = 0.8;

/// Size of the runner-up pool sampled when the argmax is not taken.
const TOP_CANDIDATE_POOL: usize = 3;

/// Greedily constructs a candidate selection of up to four modules.
///
/// The first module is drawn uniformly; each later step scores the
/// current selection extended by every unchosen module, then takes the
/// argmax with probability 0.8 or a uniform pick among the top three by
/// score. Ties on equal scores resolve toward the lower module index for
/// the argmax and arbitrarily within the top-three pool. Pools with fewer
/// than four modules produce correspondingly shorter selections.
///
/// # Panics
///
/// In debug builds, panics if `modules` is empty.
pub fn construct<R>(
    modules: &[ModuleInfo],
    preferences: &AttrPreferences,
    rng: &mut R,
) -> Result<LightweightSolution, EvalError>
where
    R: Rng + ?Sized,
{
    debug_assert!(
        !modules.is_empty(),
        "called `construct` with an empty module pool"
    );

    let n = modules.len();
    let mut chosen = FixedBitSet::with_capacity(n);
    let mut indices: SmallVec<[usize; SOLUTION_SIZE]> = SmallVec::new();

    let seed = rng.random_range(0..n);
    indices.push(seed);
    chosen.insert(seed);

    for _ in 1..SOLUTION_SIZE {
        let mut candidates: Vec<(i32, usize)> = Vec::with_capacity(n - indices.len());

        for module_index in 0..n {
            if chosen.contains(module_index) {
                continue;
            }

            indices.push(module_index);
            let score = score_by_indices(&indices, modules, preferences)?;
            indices.pop();

            candidates.push((score, module_index));
        }

        if candidates.is_empty() {
            break;
        }

        let pick = if rng.random_bool(BEST_PICK_PROBABILITY) {
            let mut best = candidates[0];
            for &candidate in &candidates[1..] {
                if candidate.0 > best.0 {
                    best = candidate;
                }
            }
            best.1
        } else {
            candidates.sort_unstable_by(|a, b| b.0.cmp(&a.0));
            let pool = candidates.len().min(TOP_CANDIDATE_POOL);
            candidates[rng.random_range(0..pool)].1
        };

        indices.push(pick);
        chosen.insert(pick);
    }

    let score = score_by_indices(&indices, modules, preferences)?;
    Ok(LightweightSolution::new(indices, score))
}
