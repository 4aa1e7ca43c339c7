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

//! Caller-supplied preferences and hard requirements.
//!
//! Preferences reshape the score (doubling targeted attributes, zeroing
//! excluded ones); minimum-sum requirements prune combinations before they
//! are scored at all. The heuristic strategy honors preferences only; the
//! enumeration strategy honors both.

use crate::index::AttrId;
use std::collections::{HashMap, HashSet};

/// Per-attribute scoring preferences.
///
/// A targeted attribute contributes twice its per-level power; an excluded
/// attribute contributes nothing. When an id appears in both sets, target
/// wins.
///
/// # Examples
///
/// ```rust
/// # use loadout_model::constraints::AttrPreferences;
/// # use loadout_model::index::AttrId;
///
/// let prefs = AttrPreferences::new()
///     .with_targets([AttrId::new(1110)])
///     .with_excludes([AttrId::new(1111)]);
///
/// assert!(prefs.is_target(AttrId::new(1110)));
/// assert!(prefs.is_excluded(AttrId::new(1111)));
/// assert!(!prefs.is_target(AttrId::new(1112)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrPreferences {
    target: HashSet<AttrId>,
    exclude: HashSet<AttrId>,
}

impl AttrPreferences {
    /// Creates empty preferences (every attribute contributes its base
    /// power).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds attribute ids whose contribution is doubled.
    pub fn with_targets<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = AttrId>,
    {
        self.target.extend(ids);
        self
    }

    /// Adds attribute ids whose contribution is zeroed.
    pub fn with_excludes<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = AttrId>,
    {
        self.exclude.extend(ids);
        self
    }

    /// Returns the targeted attribute ids.
    #[inline]
    pub fn target(&self) -> &HashSet<AttrId> {
        &self.target
    }

    /// Returns the excluded attribute ids.
    #[inline]
    pub fn exclude(&self) -> &HashSet<AttrId> {
        &self.exclude
    }

    /// Returns `true` if the id is targeted.
    #[inline]
    pub fn is_target(&self, id: AttrId) -> bool {
        self.target.contains(&id)
    }

    /// Returns `true` if the id is excluded.
    #[inline]
    pub fn is_excluded(&self, id: AttrId) -> bool {
        self.exclude.contains(&id)
    }

    /// Returns `true` if neither set contains any id.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty() && self.exclude.is_empty()
    }
}

/// The full constraint bundle accepted by the enumeration strategy.
///
/// Combines scoring preferences with hard minimum-sum requirements: a
/// combination whose summed value for some constrained id falls below the
/// required minimum is discarded before scoring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
    preferences: AttrPreferences,
    min_attr_sums: HashMap<AttrId, i32>,
}

impl Constraints {
    /// Creates an empty constraint bundle.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scoring preferences.
    pub fn with_preferences(mut self, preferences: AttrPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Requires the summed value of `id` across a combination to reach at
    /// least `min_sum`.
    pub fn with_min_attr_sum(mut self, id: AttrId, min_sum: i32) -> Self {
        self.min_attr_sums.insert(id, min_sum);
        self
    }

    /// Adds several minimum-sum requirements at once.
    pub fn with_min_attr_sums<I>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = (AttrId, i32)>,
    {
        self.min_attr_sums.extend(requirements);
        self
    }

    /// Returns the scoring preferences.
    #[inline]
    pub fn preferences(&self) -> &AttrPreferences {
        &self.preferences
    }

    /// Returns the minimum-sum requirements.
    #[inline]
    pub fn min_attr_sums(&self) -> &HashMap<AttrId, i32> {
        &self.min_attr_sums
    }

    /// Returns `true` if any minimum-sum requirement is present.
    #[inline]
    pub fn has_min_attr_sums(&self) -> bool {
        !self.min_attr_sums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_membership() {
        let prefs = AttrPreferences::new()
            .with_targets([AttrId::new(1110), AttrId::new(1409)])
            .with_excludes([AttrId::new(1308)]);

        assert!(prefs.is_target(AttrId::new(1110)));
        assert!(prefs.is_target(AttrId::new(1409)));
        assert!(prefs.is_excluded(AttrId::new(1308)));
        assert!(!prefs.is_excluded(AttrId::new(1110)));
        assert!(!prefs.is_empty());
    }

    #[test]
    fn test_preferences_default_is_empty() {
        let prefs = AttrPreferences::default();
        assert!(prefs.is_empty());
        assert!(prefs.target().is_empty());
        assert!(prefs.exclude().is_empty());
    }

    #[test]
    fn test_constraints_min_attr_sums() {
        let constraints = Constraints::new()
            .with_min_attr_sum(AttrId::new(1110), 5)
            .with_min_attr_sums([(AttrId::new(1111), 2), (AttrId::new(1112), 8)]);

        assert!(constraints.has_min_attr_sums());
        assert_eq!(constraints.min_attr_sums().len(), 3);
        assert_eq!(constraints.min_attr_sums()[&AttrId::new(1112)], 8);
    }

    #[test]
    fn test_constraints_default_has_no_requirements() {
        let constraints = Constraints::new();
        assert!(!constraints.has_min_attr_sums());
        assert!(constraints.preferences().is_empty());
    }
}
