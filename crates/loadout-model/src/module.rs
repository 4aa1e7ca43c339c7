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

//! Equipment modules and their attribute parts.
//!
//! A module is one piece of character equipment carrying a small bag of
//! attribute lines ("parts"). Both records are immutable for the duration
//! of an optimization call; strategies address modules by their position
//! in the caller-supplied list and never mutate them.

use crate::index::AttrId;

/// One attribute line on a module: a typed id, a display name, and a
/// positive value.
///
/// A module's parts form an unordered multiset. The same id may appear at
/// most once per module in practice, but scoring tolerates duplicates by
/// summation.
///
/// # Examples
///
/// ```rust
/// # use loadout_model::index::AttrId;
/// # use loadout_model::module::ModulePart;
///
/// let part = ModulePart::new(AttrId::new(1110), "力量加持", 2);
/// assert_eq!(part.id(), AttrId::new(1110));
/// assert_eq!(part.name(), "力量加持");
/// assert_eq!(part.value(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModulePart {
    id: AttrId,
    name: String,
    value: i32,
}

impl ModulePart {
    /// Creates a new attribute part.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not positive.
    pub fn new<N>(id: AttrId, name: N, value: i32) -> Self
    where
        N: Into<String>,
    {
        assert!(
            value > 0,
            "called `ModulePart::new` with non-positive value: {}",
            value
        );

        Self {
            id,
            name: name.into(),
            value,
        }
    }

    /// Returns the attribute id.
    #[inline]
    pub fn id(&self) -> AttrId {
        self.id
    }

    /// Returns the display name of the attribute.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl std::fmt::Display for ModulePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.name, self.value)
    }
}

/// One equipment module.
///
/// `name`, `config_id`, `uuid`, and `quality` are opaque to the engine:
/// they are carried through to the hydrated solutions for the host to
/// display, but scoring only ever looks at `parts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    name: String,
    config_id: i32,
    uuid: i32,
    quality: i32,
    parts: Vec<ModulePart>,
}

impl ModuleInfo {
    /// Creates a new module from its host-supplied fields.
    pub fn new<N>(name: N, config_id: i32, uuid: i32, quality: i32, parts: Vec<ModulePart>) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            config_id,
            uuid,
            quality,
            parts,
        }
    }

    /// Returns the display name of the module.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the host configuration id.
    #[inline]
    pub fn config_id(&self) -> i32 {
        self.config_id
    }

    /// Returns the host-unique identifier of this module instance.
    #[inline]
    pub fn uuid(&self) -> i32 {
        self.uuid
    }

    /// Returns the quality tier.
    #[inline]
    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Returns the attribute parts of this module.
    #[inline]
    pub fn parts(&self) -> &[ModulePart] {
        &self.parts
    }

    /// Returns the sum of all part values on this module.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use loadout_model::index::AttrId;
    /// # use loadout_model::module::{ModuleInfo, ModulePart};
    ///
    /// let module = ModuleInfo::new(
    ///     "基础攻击",
    ///     5500101,
    ///     1,
    ///     3,
    ///     vec![
    ///         ModulePart::new(AttrId::new(1110), "力量加持", 2),
    ///         ModulePart::new(AttrId::new(1409), "暴击专注", 1),
    ///     ],
    /// );
    /// assert_eq!(module.total_part_value(), 3);
    /// ```
    #[inline]
    pub fn total_part_value(&self) -> i32 {
        self.parts.iter().map(ModulePart::value).sum()
    }
}

impl std::fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ModuleInfo(name: {}, quality: {}, parts: {})",
            self.name,
            self.quality,
            self.parts.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_part_accessors() {
        let part = ModulePart::new(AttrId::new(1308), "抵御物理", 3);
        assert_eq!(part.id().get(), 1308);
        assert_eq!(part.name(), "抵御物理");
        assert_eq!(part.value(), 3);
        assert_eq!(format!("{}", part), "抵御物理+3");
    }

    #[test]
    #[should_panic(expected = "non-positive value")]
    fn test_module_part_rejects_zero_value() {
        let _ = ModulePart::new(AttrId::new(1110), "力量加持", 0);
    }

    #[test]
    fn test_module_info_accessors_and_total() {
        let module = ModuleInfo::new(
            "高性能攻击",
            5500102,
            42,
            5,
            vec![
                ModulePart::new(AttrId::new(1110), "力量加持", 1),
                ModulePart::new(AttrId::new(1111), "敏捷加持", 2),
                ModulePart::new(AttrId::new(1112), "智力加持", 3),
            ],
        );

        assert_eq!(module.name(), "高性能攻击");
        assert_eq!(module.config_id(), 5500102);
        assert_eq!(module.uuid(), 42);
        assert_eq!(module.quality(), 5);
        assert_eq!(module.parts().len(), 3);
        assert_eq!(module.total_part_value(), 6);
    }

    #[test]
    fn test_module_info_allows_empty_parts() {
        let module = ModuleInfo::new("基础治疗", 5500201, 7, 2, Vec::new());
        assert!(module.parts().is_empty());
        assert_eq!(module.total_part_value(), 0);
    }
}
