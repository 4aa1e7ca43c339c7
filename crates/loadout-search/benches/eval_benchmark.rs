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

//! Benchmarks for the combat-power evaluator.
//!
//! The index path dominates the runtime of both strategies, so any
//! regression here is a regression of the whole engine. Pools are
//! synthesized with a seeded generator so runs stay comparable.

use criterion::{Criterion, criterion_group, criterion_main};
use loadout_model::constraints::AttrPreferences;
use loadout_model::index::AttrId;
use loadout_model::module::{ModuleInfo, ModulePart};
use loadout_search::eval::{power_with_breakdown, score_by_indices};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ATTR_POOL: [(i32, &str); 8] = [
    (1110, "力量加持"),
    (1111, "敏捷加持"),
    (1112, "智力加持"),
    (1409, "暴击专注"),
    (1407, "施法专注"),
    (1308, "抵御物理"),
    (1601, "极-伤害叠加"),
    (1607, "极-全队幸暴"),
];

fn synthetic_pool(num_modules: usize, rng: &mut StdRng) -> Vec<ModuleInfo> {
    (0..num_modules)
        .map(|uuid| {
            let num_parts = rng.random_range(2..=3);
            let parts = (0..num_parts)
                .map(|_| {
                    let (id, name) = ATTR_POOL[rng.random_range(0..ATTR_POOL.len())];
                    ModulePart::new(AttrId::new(id), name, rng.random_range(1..=3))
                })
                .collect();
            ModuleInfo::new("基础攻击", 5500101, uuid as i32, 3, parts)
        })
        .collect()
}

fn random_subsets(num_modules: usize, count: usize, rng: &mut StdRng) -> Vec<[usize; 4]> {
    (0..count)
        .map(|_| {
            let mut subset = [0_usize; 4];
            let mut filled = 0;
            while filled < 4 {
                let candidate = rng.random_range(0..num_modules);
                if !subset[..filled].contains(&candidate) {
                    subset[filled] = candidate;
                    filled += 1;
                }
            }
            subset.sort_unstable();
            subset
        })
        .collect()
}

fn bench_score_by_indices(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xACE5);
    let modules = synthetic_pool(60, &mut rng);
    let subsets = random_subsets(modules.len(), 1024, &mut rng);
    let preferences = AttrPreferences::new()
        .with_targets([AttrId::new(1110)])
        .with_excludes([AttrId::new(1308)]);

    c.bench_function("score_by_indices/1024_subsets", |b| {
        b.iter(|| {
            let mut checksum = 0_i64;
            for subset in &subsets {
                checksum +=
                    score_by_indices(subset, &modules, &preferences).expect("score") as i64;
            }
            checksum
        })
    });
}

fn bench_power_with_breakdown(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let modules = synthetic_pool(4, &mut rng);

    c.bench_function("power_with_breakdown/4_modules", |b| {
        b.iter(|| power_with_breakdown(&modules).expect("power"))
    });
}

criterion_group!(benches, bench_score_by_indices, bench_power_with_breakdown);
criterion_main!(benches);
