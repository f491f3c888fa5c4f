use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type GameScore = u32;
pub type ScoreId = i64;

/// A persisted high-score record.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: ScoreId,
    pub score: GameScore,
    pub player_name: String,
    pub creation_date: DateTime<Utc>,
}

/// Body of a score submission. The server assigns the id, and stamps the
/// current time when `creationDate` is missing.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub score: GameScore,
    pub player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl NewScore {
    pub fn new(score: GameScore, player_name: impl Into<String>) -> Self {
        Self {
            score,
            player_name: player_name.into(),
            creation_date: Some(Utc::now()),
        }
    }

    pub fn into_entry(self, id: ScoreId, now: DateTime<Utc>) -> ScoreEntry {
        ScoreEntry {
            id,
            score: self.score,
            player_name: self.player_name,
            creation_date: self.creation_date.unwrap_or(now),
        }
    }
}

// Higher scores rank first; among equal scores the later submission wins.
impl Ord for ScoreEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.id.cmp(&other.id))
            .then_with(|| self.creation_date.cmp(&other.creation_date))
            .then_with(|| self.player_name.cmp(&other.player_name))
    }
}

impl PartialOrd for ScoreEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
