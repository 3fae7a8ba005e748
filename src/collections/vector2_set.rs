use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::math::Vector2;

/// Exact coordinate key. `0.0` and `-0.0` hash and compare equal, as do all NaNs.
type CoordKey = (OrderedFloat<f64>, OrderedFloat<f64>);

fn coord_key(v: Vector2) -> CoordKey {
    (OrderedFloat(v.x), OrderedFloat(v.y))
}

/// A set of [`Vector2`] values with at most one entry per `(x, y)` pair.
///
/// Iteration follows first-insertion order. Adding a vector whose
/// coordinates are already present replaces the stored value in place.
#[derive(Debug, Clone, Default)]
pub struct Vector2Set {
    entries: Vec<Vector2>,
    index: HashMap<CoordKey, usize>,
}

impl Vector2Set {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the textual key for `v`, identical to its `Display` form.
    ///
    /// Two vectors share a key exactly when the set treats them as the same
    /// member.
    #[must_use]
    pub fn key_of(v: Vector2) -> String {
        v.to_string()
    }

    /// Inserts `v`, replacing any stored vector with the same coordinates.
    ///
    /// Returns `true` if the coordinates were not present before.
    pub fn add(&mut self, v: Vector2) -> bool {
        match self.index.get(&coord_key(v)) {
            Some(&slot) => {
                self.entries[slot] = v;
                false
            }
            None => {
                self.index.insert(coord_key(v), self.entries.len());
                self.entries.push(v);
                true
            }
        }
    }

    /// Returns `true` if a vector with `v`'s coordinates is stored.
    #[must_use]
    pub fn has(&self, v: Vector2) -> bool {
        self.index.contains_key(&coord_key(v))
    }

    /// Removes the vector with `v`'s coordinates, returning the stored value.
    pub fn remove(&mut self, v: Vector2) -> Option<Vector2> {
        let slot = self.index.remove(&coord_key(v))?;
        let removed = self.entries.remove(slot);
        for i in self.index.values_mut() {
            if *i > slot {
                *i -= 1;
            }
        }
        Some(removed)
    }

    /// Returns a new set with the members satisfying `predicate`, in order.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&Vector2) -> bool) -> Self {
        self.entries.iter().copied().filter(|v| predicate(v)).collect()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns the number of distinct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored vectors in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Vector2> + '_ {
        self.entries.iter()
    }

    /// Returns the stored vectors in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Vector2> {
        self.entries.clone()
    }
}

impl FromIterator<Vector2> for Vector2Set {
    fn from_iter<I: IntoIterator<Item = Vector2>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Vector2> for Vector2Set {
    fn extend<I: IntoIterator<Item = Vector2>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl<'a> IntoIterator for &'a Vector2Set {
    type Item = &'a Vector2;
    type IntoIter = std::slice::Iter<'a, Vector2>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
