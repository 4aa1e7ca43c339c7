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

//! Combat-power evaluation.
//!
//! Two paths share the same scoring rules but different accumulators. The
//! index path runs once per candidate combination inside the search loops,
//! so it sums per-attribute values in a fixed-capacity flat array with a
//! linear id probe: at most ~20 distinct attribute ids ever occur across
//! four modules, and at that cardinality a linear scan over two small
//! arrays stays in cache where a general-purpose hash map would not. The
//! name path runs once per surviving solution at hydration time and uses
//! an ordered map, since its output doubles as the user-facing breakdown.

use crate::error::EvalError;
use crate::tables::{
    BASIC_ATTR_POWER, SPECIAL_ATTR_POWER, attr_level, is_special_attr_id, is_special_attr_name,
    total_attr_power,
};
use loadout_model::constraints::AttrPreferences;
use loadout_model::index::AttrId;
use loadout_model::module::ModuleInfo;
use loadout_model::solution::{LightweightSolution, ModuleSolution};
use std::collections::BTreeMap;

/// Capacity of the flat per-attribute accumulator. Four modules with a
/// handful of parts each never exceed this in the game data.
pub const ATTR_ACCUMULATOR_CAPACITY: usize = 20;

/// Fixed-capacity per-attribute-id sum accumulator with linear probing.
struct AttrAccumulator {
    ids: [AttrId; ATTR_ACCUMULATOR_CAPACITY],
    sums: [i32; ATTR_ACCUMULATOR_CAPACITY],
    len: usize,
}

impl AttrAccumulator {
    #[inline(always)]
    fn new() -> Self {
        Self {
            ids: [AttrId::new(0); ATTR_ACCUMULATOR_CAPACITY],
            sums: [0; ATTR_ACCUMULATOR_CAPACITY],
            len: 0,
        }
    }

    #[inline(always)]
    fn add(&mut self, id: AttrId, value: i32) -> Result<(), EvalError> {
        for slot in 0..self.len {
            if self.ids[slot] == id {
                self.sums[slot] += value;
                return Ok(());
            }
        }

        if self.len == ATTR_ACCUMULATOR_CAPACITY {
            return Err(EvalError::AttrCapacityExceeded {
                capacity: ATTR_ACCUMULATOR_CAPACITY,
            });
        }

        self.ids[self.len] = id;
        self.sums[self.len] = value;
        self.len += 1;
        Ok(())
    }

    #[inline(always)]
    fn entries(&self) -> impl Iterator<Item = (AttrId, i32)> + '_ {
        (0..self.len).map(|slot| (self.ids[slot], self.sums[slot]))
    }
}

/// Scores a selection of modules, honoring attribute preferences.
///
/// This is the hot path of both strategies: no allocation, no hashing.
/// The selection may hold 1 to 4 indices; the greedy construction scores
/// partial selections while it grows them.
///
/// # Panics
///
/// In debug builds, panics if any index is out of bounds for `modules`.
///
/// # Examples
///
/// ```rust
/// # use loadout_model::constraints::AttrPreferences;
/// # use loadout_model::index::AttrId;
/// # use loadout_model::module::{ModuleInfo, ModulePart};
/// # use loadout_search::eval::score_by_indices;
///
/// let module = ModuleInfo::new(
///     "基础攻击",
///     5500101,
///     1,
///     3,
///     vec![ModulePart::new(AttrId::new(1110), "力量加持", 1)],
/// );
/// let modules = vec![module.clone(), module.clone(), module.clone(), module];
///
/// // Sum 4 reaches level 2 (basic power 14); total-power table adds 23.
/// let score = score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new()).unwrap();
/// assert_eq!(score, 37);
/// ```
pub fn score_by_indices(
    indices: &[usize],
    modules: &[ModuleInfo],
    preferences: &AttrPreferences,
) -> Result<i32, EvalError> {
    let mut accumulator = AttrAccumulator::new();
    let mut total_sum = 0_i32;

    for &index in indices {
        debug_assert!(
            index < modules.len(),
            "called `score_by_indices` with module index out of bounds: the len is {} but the index is {}",
            modules.len(),
            index
        );

        for part in modules[index].parts() {
            accumulator.add(part.id(), part.value())?;
            total_sum += part.value();
        }
    }

    let mut threshold_power = 0_i32;
    for (id, sum) in accumulator.entries() {
        let level = attr_level(sum);
        if level == 0 {
            continue;
        }

        let base = if is_special_attr_id(id) {
            SPECIAL_ATTR_POWER[level - 1]
        } else {
            BASIC_ATTR_POWER[level - 1]
        };

        threshold_power += if preferences.is_target(id) {
            base * 2
        } else if preferences.is_excluded(id) {
            0
        } else {
            base
        };
    }

    let total_power =
        total_attr_power(total_sum).ok_or(EvalError::TotalOutOfRange { total: total_sum })?;

    Ok(threshold_power + total_power)
}

/// Computes the raw combat power of a module selection together with the
/// attribute-name → summed-value breakdown.
///
/// Unlike [`score_by_indices`] this path classifies attributes by name
/// and applies no preference multipliers: the breakdown reports raw sums
/// for display. Used only at hydration time.
pub fn power_with_breakdown(
    modules: &[ModuleInfo],
) -> Result<(i32, BTreeMap<String, i32>), EvalError> {
    let mut breakdown: BTreeMap<String, i32> = BTreeMap::new();
    for module in modules {
        for part in module.parts() {
            *breakdown.entry(part.name().to_owned()).or_insert(0) += part.value();
        }
    }

    let mut threshold_power = 0_i32;
    let mut total_sum = 0_i32;
    for (name, &sum) in &breakdown {
        total_sum += sum;

        let level = attr_level(sum);
        if level == 0 {
            continue;
        }

        threshold_power += if is_special_attr_name(name) {
            SPECIAL_ATTR_POWER[level - 1]
        } else {
            BASIC_ATTR_POWER[level - 1]
        };
    }

    let total_power =
        total_attr_power(total_sum).ok_or(EvalError::TotalOutOfRange { total: total_sum })?;

    Ok((threshold_power + total_power, breakdown))
}

/// Hydrates a lightweight solution into the caller-facing record.
///
/// The selected modules are copied out of the pool and the breakdown is
/// recomputed via the by-name path. The recorded score of the lightweight
/// solution is kept as-is: it already folds in the caller's preference
/// multipliers, which the breakdown deliberately does not.
///
/// # Panics
///
/// In debug builds, panics if any index is out of bounds for `modules`.
pub fn hydrate_solution(
    lightweight: &LightweightSolution,
    modules: &[ModuleInfo],
) -> Result<ModuleSolution, EvalError> {
    let mut selected = Vec::with_capacity(lightweight.indices().len());
    for &index in lightweight.indices() {
        debug_assert!(
            index < modules.len(),
            "called `hydrate_solution` with module index out of bounds: the len is {} but the index is {}",
            modules.len(),
            index
        );

        selected.push(modules[index].clone());
    }

    let (_, breakdown) = power_with_breakdown(&selected)?;
    Ok(ModuleSolution::new(selected, lightweight.score(), breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_model::module::ModulePart;
    use smallvec::smallvec;

    fn strength_module(value: i32) -> ModuleInfo {
        ModuleInfo::new(
            "基础攻击",
            5500101,
            1,
            3,
            vec![ModulePart::new(AttrId::new(1110), "力量加持", value)],
        )
    }

    fn strength_pool() -> Vec<ModuleInfo> {
        vec![
            strength_module(1),
            strength_module(1),
            strength_module(1),
            strength_module(1),
        ]
    }

    #[test]
    fn test_score_threshold_boundary() {
        // Per-attribute sum 4 -> level 2 -> basic power 14; total 4 -> 23.
        let score = score_by_indices(&[0, 1, 2, 3], &strength_pool(), &AttrPreferences::new())
            .expect("score");
        assert_eq!(score, 37);
    }

    #[test]
    fn test_score_target_doubles_contribution() {
        let preferences = AttrPreferences::new().with_targets([AttrId::new(1110)]);
        let score =
            score_by_indices(&[0, 1, 2, 3], &strength_pool(), &preferences).expect("score");
        assert_eq!(score, 28 + 23);
    }

    #[test]
    fn test_score_exclude_zeroes_contribution() {
        let preferences = AttrPreferences::new().with_excludes([AttrId::new(1110)]);
        let score =
            score_by_indices(&[0, 1, 2, 3], &strength_pool(), &preferences).expect("score");
        assert_eq!(score, 23);
    }

    #[test]
    fn test_score_target_wins_over_exclude() {
        let preferences = AttrPreferences::new()
            .with_targets([AttrId::new(1110)])
            .with_excludes([AttrId::new(1110)]);
        let score =
            score_by_indices(&[0, 1, 2, 3], &strength_pool(), &preferences).expect("score");
        assert_eq!(score, 28 + 23);
    }

    #[test]
    fn test_score_special_attribute_uses_special_ladder() {
        let module = ModuleInfo::new(
            "高性能守护",
            5500302,
            2,
            5,
            vec![ModulePart::new(AttrId::new(1608), "极-绝境守护", 1)],
        );
        let modules = vec![module.clone(), module.clone(), module.clone(), module];

        // Sum 4 -> level 2 -> special power 29; total 4 -> 23.
        let score =
            score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new()).expect("score");
        assert_eq!(score, 29 + 23);
    }

    #[test]
    fn test_score_sums_duplicate_ids_within_one_module() {
        let module = ModuleInfo::new(
            "基础攻击",
            5500101,
            3,
            3,
            vec![
                ModulePart::new(AttrId::new(1110), "力量加持", 1),
                ModulePart::new(AttrId::new(1110), "力量加持", 3),
            ],
        );

        // Sum 4 -> level 2 -> 14; total 4 -> 23.
        let score = score_by_indices(&[0], &[module], &AttrPreferences::new()).expect("score");
        assert_eq!(score, 37);
    }

    #[test]
    fn test_score_is_pure() {
        let modules = strength_pool();
        let preferences = AttrPreferences::new().with_targets([AttrId::new(1110)]);
        let first = score_by_indices(&[0, 1, 2, 3], &modules, &preferences).expect("score");
        let second = score_by_indices(&[0, 1, 2, 3], &modules, &preferences).expect("score");
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_rejects_total_beyond_table_domain() {
        let module = ModuleInfo::new(
            "基础攻击",
            5500101,
            4,
            3,
            vec![ModulePart::new(AttrId::new(1110), "力量加持", 40)],
        );
        let modules = vec![module.clone(), module.clone(), module.clone(), module];

        let result = score_by_indices(&[0, 1, 2, 3], &modules, &AttrPreferences::new());
        assert_eq!(result, Err(EvalError::TotalOutOfRange { total: 160 }));
    }

    #[test]
    fn test_score_rejects_accumulator_overflow() {
        let parts = (0..(ATTR_ACCUMULATOR_CAPACITY as i32 + 1))
            .map(|offset| ModulePart::new(AttrId::new(2000 + offset), "未知词条", 1))
            .collect();
        let module = ModuleInfo::new("异常模组", 5500101, 5, 3, parts);

        let result = score_by_indices(&[0], &[module], &AttrPreferences::new());
        assert_eq!(
            result,
            Err(EvalError::AttrCapacityExceeded {
                capacity: ATTR_ACCUMULATOR_CAPACITY
            })
        );
    }

    #[test]
    fn test_power_with_breakdown_reports_raw_sums() {
        let attack = ModuleInfo::new(
            "基础攻击",
            5500101,
            6,
            3,
            vec![
                ModulePart::new(AttrId::new(1110), "力量加持", 2),
                ModulePart::new(AttrId::new(1409), "暴击专注", 1),
            ],
        );
        let guard = ModuleInfo::new(
            "基础防护",
            5500301,
            7,
            3,
            vec![ModulePart::new(AttrId::new(1110), "力量加持", 2)],
        );

        let (power, breakdown) = power_with_breakdown(&[attack, guard]).expect("power");

        // 力量加持 sums to 4 (level 2 -> 14), 暴击专注 to 1 (level 1 -> 7);
        // total 5 -> 29.
        assert_eq!(power, 14 + 7 + 29);
        assert_eq!(breakdown["力量加持"], 4);
        assert_eq!(breakdown["暴击专注"], 1);

        let names: Vec<&str> = breakdown.keys().map(String::as_str).collect();
        let mut sorted_names = names.clone();
        sorted_names.sort_unstable();
        assert_eq!(names, sorted_names);
    }

    #[test]
    fn test_hydrate_keeps_recorded_score_and_recomputes_breakdown() {
        let modules = strength_pool();
        let preferences = AttrPreferences::new().with_targets([AttrId::new(1110)]);
        let score = score_by_indices(&[0, 1, 2, 3], &modules, &preferences).expect("score");

        let lightweight = LightweightSolution::new(smallvec![0, 1, 2, 3], score);
        let solution = hydrate_solution(&lightweight, &modules).expect("hydrate");

        // The preference-adjusted score is kept even though the breakdown
        // path would report the unboosted power.
        assert_eq!(solution.score(), 51);
        assert_eq!(solution.modules().len(), 4);
        assert_eq!(solution.attr_breakdown()["力量加持"], 4);
    }
}
