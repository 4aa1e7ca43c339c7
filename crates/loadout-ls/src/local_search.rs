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

//! First-improvement local search over single-module swaps.
//!
//! The neighborhood of a selection is "replace one position with one
//! sampled module". Moves are committed on the first strict improvement;
//! equal-score moves are rejected, which keeps the walk off plateaus and
//! needs no cycle detection. Once a full round finds nothing and the
//! iteration counter has passed the halfway mark, further rounds are
//! unlikely to pay for themselves and the search stops early.

use loadout_model::constraints::AttrPreferences;
use loadout_model::module::ModuleInfo;
use loadout_model::solution::{LightweightSolution, SOLUTION_SIZE};
use loadout_search::error::EvalError;
use loadout_search::eval::score_by_indices;
use rand::Rng;
use smallvec::SmallVec;

/// Replacement candidates sampled per position and round (capped by the
/// pool size).
const REPLACEMENT_SAMPLES: usize = 20;

/// Improves a selection by repeated first-improvement swaps.
///
/// Runs up to `iterations` rounds. Each round walks the positions of the
/// selection; per position it samples up to `min(20, n)` replacement
/// indices uniformly with replacement, skips those already present, and
/// commits the first swap that strictly beats the incumbent score,
/// restarting the round walk afterwards.
pub fn improve<R>(
    solution: LightweightSolution,
    modules: &[ModuleInfo],
    iterations: usize,
    preferences: &AttrPreferences,
    rng: &mut R,
) -> Result<LightweightSolution, EvalError>
where
    R: Rng + ?Sized,
{
    let n = modules.len();
    let mut best = solution;

    for iteration in 0..iterations {
        let mut improved = false;

        'positions: for position in 0..best.indices().len() {
            let samples = REPLACEMENT_SAMPLES.min(n);

            for _ in 0..samples {
                let candidate = rng.random_range(0..n);
                if best.indices().contains(&candidate) {
                    continue;
                }

                let mut trial: SmallVec<[usize; SOLUTION_SIZE]> =
                    SmallVec::from_slice(best.indices());
                trial[position] = candidate;

                let score = score_by_indices(&trial, modules, preferences)?;
                if score > best.score() {
                    best = LightweightSolution::new(trial, score);
                    improved = true;
                    break 'positions;
                }
            }
        }

        if !improved && iteration > iterations / 2 {
            break;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_model::index::AttrId;
    use loadout_model::module::ModulePart;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use smallvec::smallvec;

    fn strength_module(uuid: i32, value: i32) -> ModuleInfo {
        ModuleInfo::new(
            "基础攻击",
            5500101,
            uuid,
            3,
            vec![ModulePart::new(AttrId::new(1110), "力量加持", value)],
        )
    }

    #[test]
    fn test_improve_never_worsens_the_score() {
        let modules: Vec<ModuleInfo> = (0..12)
            .map(|uuid| strength_module(uuid, (uuid % 3) + 1))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let start = LightweightSolution::new(
            smallvec![0, 1, 2, 3],
            score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new()).unwrap(),
        );
        let start_score = start.score();

        let improved =
            improve(start, &modules, 30, &AttrPreferences::new(), &mut rng).expect("improve");
        assert!(improved.score() >= start_score);
    }

    #[test]
    fn test_improve_finds_the_obvious_upgrade() {
        // One module is strictly better than every module of the starting
        // selection; enough sampling rounds must discover the swap.
        let mut modules: Vec<ModuleInfo> = (0..4).map(|uuid| strength_module(uuid, 1)).collect();
        modules.push(strength_module(4, 16));

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let start = LightweightSolution::new(
            smallvec![0, 1, 2, 3],
            score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new()).unwrap(),
        );

        let improved =
            improve(start, &modules, 30, &AttrPreferences::new(), &mut rng).expect("improve");
        assert!(
            improved.indices().contains(&4),
            "the dominant module must enter the selection"
        );
    }

    #[test]
    fn test_improve_keeps_indices_distinct() {
        let modules: Vec<ModuleInfo> = (0..10)
            .map(|uuid| strength_module(uuid, (uuid % 4) + 1))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(23);

        let start = LightweightSolution::new(
            smallvec![0, 1, 2, 3],
            score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new()).unwrap(),
        );
        let improved =
            improve(start, &modules, 30, &AttrPreferences::new(), &mut rng).expect("improve");

        let mut sorted: Vec<usize> = improved.indices().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn test_improve_with_zero_iterations_is_identity() {
        let modules: Vec<ModuleInfo> = (0..6).map(|uuid| strength_module(uuid, 1)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let start = LightweightSolution::new(
            smallvec![0, 1, 2, 3],
            score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new()).unwrap(),
        );
        let start_indices: Vec<usize> = start.indices().to_vec();
        let start_score = start.score();

        let unchanged =
            improve(start, &modules, 0, &AttrPreferences::new(), &mut rng).expect("improve");
        assert_eq!(unchanged.indices(), start_indices.as_slice());
        assert_eq!(unchanged.score(), start_score);
    }
}
