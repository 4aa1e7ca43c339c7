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

//! Search-phase and caller-facing solution records.
//!
//! During search only index tuples and scores move through the system; the
//! full `ModuleSolution` with copied modules and a per-attribute breakdown
//! is hydrated once, for the final top-K survivors.

use crate::module::ModuleInfo;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// The inline capacity of a solution's index tuple. Combinations are
/// always 4-subsets, so the tuple never spills to the heap.
pub const SOLUTION_SIZE: usize = 4;

/// A scoring-phase record: indices into the caller's module list plus the
/// score of that selection.
///
/// The tuple has length 4 during enumeration and length 1 to 4 transiently
/// while the greedy construction grows a candidate. Ordering and equality
/// consider the score alone.
///
/// # Examples
///
/// ```rust
/// # use loadout_model::solution::LightweightSolution;
/// # use smallvec::smallvec;
///
/// let a = LightweightSolution::new(smallvec![0, 2, 5, 7], 310);
/// let b = LightweightSolution::new(smallvec![1, 3, 4, 6], 295);
/// assert!(a > b);
/// assert_eq!(a.canonical_indices().as_slice(), &[0, 2, 5, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct LightweightSolution {
    module_indices: SmallVec<[usize; SOLUTION_SIZE]>,
    score: i32,
}

impl LightweightSolution {
    /// Creates a new lightweight solution.
    #[inline]
    pub fn new(module_indices: SmallVec<[usize; SOLUTION_SIZE]>, score: i32) -> Self {
        Self {
            module_indices,
            score,
        }
    }

    /// Returns the module indices in selection order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.module_indices
    }

    /// Returns the score of this selection.
    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Returns the indices sorted ascending, the canonical form used for
    /// deduplication across differently-ordered selections.
    #[inline]
    pub fn canonical_indices(&self) -> SmallVec<[usize; SOLUTION_SIZE]> {
        let mut canonical = self.module_indices.clone();
        canonical.sort_unstable();
        canonical
    }
}

impl PartialEq for LightweightSolution {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for LightweightSolution {}

impl PartialOrd for LightweightSolution {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LightweightSolution {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}

/// A result record returned to the caller: the resolved modules, the
/// score, and an ordered attribute-name → summed-value breakdown.
///
/// The breakdown reports raw sums for display; preference multipliers are
/// already folded into `score` and never into the breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSolution {
    modules: Vec<ModuleInfo>,
    score: i32,
    attr_breakdown: BTreeMap<String, i32>,
}

impl ModuleSolution {
    /// Creates a new hydrated solution.
    #[inline]
    pub fn new(modules: Vec<ModuleInfo>, score: i32, attr_breakdown: BTreeMap<String, i32>) -> Self {
        Self {
            modules,
            score,
            attr_breakdown,
        }
    }

    /// Returns the selected modules.
    #[inline]
    pub fn modules(&self) -> &[ModuleInfo] {
        &self.modules
    }

    /// Returns the combat-power score of this selection.
    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Returns the attribute-name → summed-value breakdown.
    #[inline]
    pub fn attr_breakdown(&self) -> &BTreeMap<String, i32> {
        &self.attr_breakdown
    }
}

impl std::fmt::Display for ModuleSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ModuleSolution(score: {})", self.score)?;
        for (position, module) in self.modules.iter().enumerate() {
            writeln!(f, "   {}. {}", position + 1, module)?;
        }
        for (name, value) in &self.attr_breakdown {
            writeln!(f, "   {}: +{}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AttrId;
    use crate::module::ModulePart;
    use smallvec::smallvec;

    #[test]
    fn test_lightweight_solution_compares_by_score_alone() {
        let low = LightweightSolution::new(smallvec![0, 1, 2, 3], 10);
        let high = LightweightSolution::new(smallvec![4, 5, 6, 7], 20);
        let also_low = LightweightSolution::new(smallvec![8, 9, 10, 11], 10);

        assert!(low < high);
        assert_eq!(low, also_low);
        assert_eq!(low.cmp(&also_low), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_canonical_indices_sorts_without_mutating() {
        let solution = LightweightSolution::new(smallvec![7, 2, 5, 0], 99);
        assert_eq!(solution.canonical_indices().as_slice(), &[0, 2, 5, 7]);
        assert_eq!(solution.indices(), &[7, 2, 5, 0]);
    }

    #[test]
    fn test_lightweight_solution_tolerates_short_tuples() {
        let partial = LightweightSolution::new(smallvec![3], 5);
        assert_eq!(partial.indices(), &[3]);
        assert_eq!(partial.canonical_indices().as_slice(), &[3]);
    }

    #[test]
    fn test_module_solution_accessors() {
        let module = ModuleInfo::new(
            "基础防护",
            5500301,
            11,
            4,
            vec![ModulePart::new(AttrId::new(1307), "抵御魔法", 2)],
        );
        let mut breakdown = BTreeMap::new();
        breakdown.insert("抵御魔法".to_owned(), 2);

        let solution = ModuleSolution::new(vec![module.clone()], 16, breakdown);
        assert_eq!(solution.modules(), &[module]);
        assert_eq!(solution.score(), 16);
        assert_eq!(solution.attr_breakdown()["抵御魔法"], 2);
    }
}
