//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two players of a session. Kuba is strictly
//! two-player, so the id is 0 or 1 and every player has a well-defined
//! `opponent`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed `[T; 2]` with O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a session.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player.
    pub const ONE: PlayerId = PlayerId(0);
    /// The second player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both player IDs in order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kuba_engine::core::{PlayerId, PlayerMap};
///
/// let mut captured: PlayerMap<u8> = PlayerMap::with_value(0);
/// captured[PlayerId::ONE] += 1;
/// assert_eq!(captured[PlayerId::ONE], 1);
/// assert_eq!(captured[PlayerId::TWO], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
    }

    #[test]
    fn test_player_map_factory() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[PlayerId::ONE], 0);
        assert_eq!(map[PlayerId::TWO], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);
        map[PlayerId::TWO] = 7;
        assert_eq!(map[PlayerId::ONE], 0);
        assert_eq!(map[PlayerId::TWO], 7);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &0), (PlayerId::TWO, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
