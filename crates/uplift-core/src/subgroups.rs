use crate::combine::Combine;
use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// Subgroups
///
/// Ordered, duplicate-friendly list of per-segment breakdowns. Position is
/// the only correlation key: slot `i` refers to the same logical segment in
/// every instance that will be combined, so all parties must emit their
/// subgroups in one agreed order. Serializes identically to `Vec<M>`.
///
/// The list is immutable once built and does not expose `DerefMut`;
/// combining produces a new list rather than editing in place.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Subgroups<M>(Vec<M>);

impl<M> Subgroups<M> {
    /// Create an empty subgroup list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a subgroup list from an existing vector.
    #[must_use]
    pub const fn from_vec(values: Vec<M>) -> Self {
        Self(values)
    }

    /// Return the number of subgroups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no subgroups.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the subgroup at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&M> {
        self.0.get(index)
    }

    /// Return an iterator over the subgroups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }
}

impl<M: Combine> Subgroups<M> {
    /// Combine slot-for-slot. Unequal lengths mean the operands do not
    /// describe the same segment layout; that is a caller bug, and merging
    /// anyway would misalign segments silently.
    fn combine_pairwise(&self, other: &Self, combine: impl Fn(&M, &M) -> M) -> Self {
        assert_eq!(self.0.len(), other.0.len(), "subgroup length mismatch");

        Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(lhs, rhs)| combine(lhs, rhs))
                .collect(),
        )
    }
}

impl<M: Combine> Combine for Subgroups<M> {
    fn combine_sum(&self, other: &Self) -> Self {
        self.combine_pairwise(other, M::combine_sum)
    }

    fn combine_shares(&self, other: &Self) -> Self {
        self.combine_pairwise(other, M::combine_shares)
    }
}

impl<M> From<Vec<M>> for Subgroups<M> {
    fn from(values: Vec<M>) -> Self {
        Self(values)
    }
}

impl<M> From<Subgroups<M>> for Vec<M> {
    fn from(values: Subgroups<M>) -> Self {
        values.0
    }
}

impl<M> FromIterator<M> for Subgroups<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<M> IntoIterator for Subgroups<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Subgroups<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// TESTS
///
