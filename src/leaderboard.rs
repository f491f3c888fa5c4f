use serde::{Deserialize, Serialize};

/// A collection kept in best-first order, where "best" is the greatest item
/// according to its [`Ord`] implementation.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaderboard<T: LeaderboardItem> {
    collection: Vec<T>,
}

impl<T: LeaderboardItem> Leaderboard<T> {
    pub fn new(mut collection: Vec<T>) -> Self {
        collection.sort_by(|a, b| b.cmp(a));
        Self { collection }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.collection.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

impl<T: LeaderboardItem> Default for Leaderboard<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: LeaderboardItem> Serialize for Leaderboard<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.collection.serialize(serializer)
    }
}

impl<'de, T: LeaderboardItem> Deserialize<'de> for Leaderboard<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::new(Vec::deserialize(deserializer)?))
    }
}

pub trait LeaderboardItem: Ord + Serialize {}

impl<T: Ord + Serialize> LeaderboardItem for T {}
