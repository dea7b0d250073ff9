//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! La Chouine is strictly two-handed: one `Human` side driven by the caller
//! and one `Ai` side usually driven by the heuristic agent. Nothing in the
//! engine treats the two differently.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides at the table.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Human,
    Ai,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Ai];

    /// Get the raw side index (human = 0, ai = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Ai => 1,
        }
    }

    /// The other side.
    ///
    /// ```
    /// use la_chouine::core::Side;
    ///
    /// assert_eq!(Side::Human.opponent(), Side::Ai);
    /// assert_eq!(Side::Ai.opponent(), Side::Human);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }

    /// Lowercase name, as used in card-table messages and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Human => "human",
            Side::Ai => "ai",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use la_chouine::core::{Side, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::with_value(0);
/// score[Side::Ai] += 10;
///
/// assert_eq!(score[Side::Human], 0);
/// assert_eq!(score[Side::Ai], 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Ai)],
        }
    }

    /// Create a SideMap from explicit human and ai values.
    pub fn from_pair(human: T, ai: T) -> Self {
        Self { data: [human, ai] }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SideMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, human first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform every entry, keeping the side association.
    pub fn map<U>(&self, f: impl Fn(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Human.index(), 0);
        assert_eq!(Side::Ai.index(), 1);
        assert_eq!(format!("{}", Side::Ai), "ai");
        assert_eq!(Side::Human.opponent().opponent(), Side::Human);
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::Human], 0);
        assert_eq!(map[Side::Ai], 10);
    }

    #[test]
    fn test_side_map_with_default() {
        let map: SideMap<Vec<i32>> = SideMap::with_default();

        assert!(map[Side::Human].is_empty());
        assert!(map[Side::Ai].is_empty());
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);

        map[Side::Human] = 10;
        *map.get_mut(Side::Ai) += 20;

        assert_eq!(map[Side::Human], 10);
        assert_eq!(map[Side::Ai], 20);
    }

    #[test]
    fn test_side_map_iter_and_map() {
        let map = SideMap::from_pair(3, 4);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Human, &3), (Side::Ai, &4)]);

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled, SideMap::from_pair(6, 8));
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::from_pair(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);

        let side_json = serde_json::to_string(&Side::Ai).unwrap();
        assert_eq!(side_json, "\"ai\"");
    }
}
