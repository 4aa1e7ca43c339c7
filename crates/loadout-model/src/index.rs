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

//! Strongly-typed attribute identifiers.
//!
//! Attribute ids and attribute values are both small integers in the game
//! data. Wrapping the id in a transparent newtype keeps the two apart at
//! compile time without any runtime cost.

/// The stable domain key of an attribute kind (e.g. `1110` for 力量加持).
///
/// # Examples
///
/// ```rust
/// # use loadout_model::index::AttrId;
///
/// let id = AttrId::new(1110);
/// assert_eq!(id.get(), 1110);
/// assert_eq!(format!("{}", id), "AttrId(1110)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrId(i32);

impl AttrId {
    /// Creates a new `AttrId` from its raw domain value.
    #[inline(always)]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw domain value.
    #[inline(always)]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for AttrId {
    #[inline(always)]
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl From<AttrId> for i32 {
    #[inline(always)]
    fn from(id: AttrId) -> Self {
        id.get()
    }
}

impl std::fmt::Display for AttrId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AttrId({})", self.0)
    }
}

impl std::fmt::Debug for AttrId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AttrId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_id_roundtrip() {
        let id = AttrId::new(1407);
        assert_eq!(id.get(), 1407);
        assert_eq!(i32::from(id), 1407);
        assert_eq!(AttrId::from(1407), id);
    }

    #[test]
    fn test_attr_id_ordering_and_hashing() {
        let mut set = std::collections::HashSet::new();
        set.insert(AttrId::new(1110));
        set.insert(AttrId::new(1110));
        set.insert(AttrId::new(1111));
        assert_eq!(set.len(), 2);
        assert!(AttrId::new(1110) < AttrId::new(1111));
    }
}
