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

//! The immutable combat-power constants.
//!
//! These tables are part of the observable contract of the engine: for a
//! given input, scores must match them bit-exactly. They are loaded once
//! per process and never mutated.
//!
//! An attribute's summed value maps to a level (how many entries of
//! `ATTR_THRESHOLDS` it meets), the level maps to a per-level power
//! depending on whether the attribute is "basic" or "special", and the
//! total value across the whole combination maps through the dense
//! `total_attr_power` table on top.

use loadout_model::index::AttrId;
use once_cell::sync::Lazy;

/// The attribute level thresholds. An attribute sum meets level `i + 1`
/// when it reaches `ATTR_THRESHOLDS[i]`.
pub const ATTR_THRESHOLDS: [i32; 6] = [1, 4, 8, 12, 16, 20];

/// Per-level combat power of basic attributes; index is `level - 1`.
pub const BASIC_ATTR_POWER: [i32; 6] = [7, 14, 29, 44, 167, 254];

/// Per-level combat power of special attributes; index is `level - 1`.
pub const SPECIAL_ATTR_POWER: [i32; 6] = [14, 29, 59, 89, 298, 448];

/// The largest total attribute sum covered by the total-power table.
pub const TOTAL_ATTR_SUM_MAX: i32 = 120;

/// Attribute ids of the eight special ("极-") attribute lines. Every
/// other id is basic.
pub const SPECIAL_ATTR_IDS: [AttrId; 8] = [
    AttrId::new(1601), // 极-伤害叠加
    AttrId::new(1602), // 极-灵活身法
    AttrId::new(1603), // 极-生命凝聚
    AttrId::new(1604), // 极-急救措施
    AttrId::new(1605), // 极-生命波动
    AttrId::new(1606), // 极-生命汲取
    AttrId::new(1607), // 极-全队幸暴
    AttrId::new(1608), // 极-绝境守护
];

/// Display names of the special attribute lines, for the by-name
/// classification used on the breakdown path.
pub const SPECIAL_ATTR_NAMES: [&str; 8] = [
    "极-伤害叠加",
    "极-灵活身法",
    "极-生命凝聚",
    "极-急救措施",
    "极-生命波动",
    "极-生命汲取",
    "极-全队幸暴",
    "极-绝境守护",
];

/// Display names of the basic attribute lines.
pub const BASIC_ATTR_NAMES: [&str; 13] = [
    "力量加持",
    "敏捷加持",
    "智力加持",
    "特攻伤害",
    "精英打击",
    "特攻治疗加持",
    "专精治疗加持",
    "施法专注",
    "攻速专注",
    "暴击专注",
    "幸运专注",
    "抵御魔法",
    "抵御物理",
];

/// The anchored entries of the total-power mapping, as shipped by the
/// game data. The ranges `[9, 17]` and `[107, 112]` are absent and are
/// filled by linear interpolation when the dense table is built.
const TOTAL_ATTR_POWER_ANCHORS: [(usize, i32); 106] = [
    (0, 0),
    (1, 5),
    (2, 11),
    (3, 17),
    (4, 23),
    (5, 29),
    (6, 34),
    (7, 40),
    (8, 46),
    (18, 104),
    (19, 110),
    (20, 116),
    (21, 122),
    (22, 128),
    (23, 133),
    (24, 139),
    (25, 145),
    (26, 151),
    (27, 157),
    (28, 163),
    (29, 168),
    (30, 174),
    (31, 180),
    (32, 186),
    (33, 192),
    (34, 198),
    (35, 203),
    (36, 209),
    (37, 215),
    (38, 221),
    (39, 227),
    (40, 233),
    (41, 238),
    (42, 244),
    (43, 250),
    (44, 256),
    (45, 262),
    (46, 267),
    (47, 273),
    (48, 279),
    (49, 285),
    (50, 291),
    (51, 297),
    (52, 302),
    (53, 308),
    (54, 314),
    (55, 320),
    (56, 326),
    (57, 332),
    (58, 337),
    (59, 343),
    (60, 349),
    (61, 355),
    (62, 361),
    (63, 366),
    (64, 372),
    (65, 378),
    (66, 384),
    (67, 390),
    (68, 396),
    (69, 401),
    (70, 407),
    (71, 413),
    (72, 419),
    (73, 425),
    (74, 431),
    (75, 436),
    (76, 442),
    (77, 448),
    (78, 454),
    (79, 460),
    (80, 466),
    (81, 471),
    (82, 477),
    (83, 483),
    (84, 489),
    (85, 495),
    (86, 500),
    (87, 506),
    (88, 512),
    (89, 518),
    (90, 524),
    (91, 530),
    (92, 535),
    (93, 541),
    (94, 547),
    (95, 553),
    (96, 559),
    (97, 565),
    (98, 570),
    (99, 576),
    (100, 582),
    (101, 588),
    (102, 594),
    (103, 599),
    (104, 605),
    (105, 611),
    (106, 617),
    (113, 658),
    (114, 664),
    (115, 669),
    (116, 675),
    (117, 681),
    (118, 687),
    (119, 693),
    (120, 699),
];

/// The dense total-power table over `[0, TOTAL_ATTR_SUM_MAX]`. Gaps in
/// the anchor list are linearly interpolated between their nearest
/// neighbors, rounded to nearest.
static TOTAL_ATTR_POWER: Lazy<[i32; (TOTAL_ATTR_SUM_MAX + 1) as usize]> =
    Lazy::new(build_total_attr_power);

fn build_total_attr_power() -> [i32; (TOTAL_ATTR_SUM_MAX + 1) as usize] {
    let mut table = [0_i32; (TOTAL_ATTR_SUM_MAX + 1) as usize];

    for window in TOTAL_ATTR_POWER_ANCHORS.windows(2) {
        let (lo_index, lo_value) = window[0];
        let (hi_index, hi_value) = window[1];
        table[lo_index] = lo_value;

        let span = (hi_index - lo_index) as i32;
        let delta = hi_value - lo_value;
        for index in (lo_index + 1)..hi_index {
            let step = (index - lo_index) as i32;
            table[index] = lo_value + (delta * step + span / 2) / span;
        }
    }

    let (last_index, last_value) = TOTAL_ATTR_POWER_ANCHORS[TOTAL_ATTR_POWER_ANCHORS.len() - 1];
    table[last_index] = last_value;
    table
}

/// Returns the attribute level for a summed attribute value, in `0..=6`.
///
/// # Examples
///
/// ```rust
/// # use loadout_search::tables::attr_level;
///
/// assert_eq!(attr_level(0), 0);
/// assert_eq!(attr_level(1), 1);
/// assert_eq!(attr_level(4), 2);
/// assert_eq!(attr_level(19), 5);
/// assert_eq!(attr_level(25), 6);
/// ```
#[inline]
pub fn attr_level(sum: i32) -> usize {
    ATTR_THRESHOLDS
        .iter()
        .take_while(|&&threshold| sum >= threshold)
        .count()
}

/// Returns `true` if the attribute id belongs to a special line.
#[inline]
pub fn is_special_attr_id(id: AttrId) -> bool {
    SPECIAL_ATTR_IDS.contains(&id)
}

/// Returns `true` if the attribute name belongs to a special line.
/// Unknown names classify as basic.
#[inline]
pub fn is_special_attr_name(name: &str) -> bool {
    SPECIAL_ATTR_NAMES.contains(&name)
}

/// Returns the total-power contribution for a combination's total
/// attribute sum, or `None` when the sum is outside `[0, 120]`.
#[inline]
pub fn total_attr_power(total: i32) -> Option<i32> {
    if (0..=TOTAL_ATTR_SUM_MAX).contains(&total) {
        Some(TOTAL_ATTR_POWER[total as usize])
    } else {
        None
    }
}
