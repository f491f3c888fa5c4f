use chrono::{DateTime, SecondsFormat, Utc};
use rocket::serde::json::Json;
use rocket::*;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::Row;

use snake_scores::{GameScore, Leaderboard, NewScore, ScoreEntry, ScoreId};

mod request_error;
pub mod requests;
pub mod schema;

pub use request_error::*;
pub use schema::Backend;

pub type DatabasePool = sqlx::AnyPool;

const MAX_CONNECTIONS: u32 = 5;

/// Connects to `database_url` and makes sure the `scores` table exists.
pub async fn connect(database_url: &str) -> Result<DatabasePool, RequestError> {
    sqlx::any::install_default_drivers();
    let backend = Backend::from_url(database_url)?;

    // Every connection to an in-memory SQLite database sees its own database,
    // so the pool must hold on to exactly one
    let options = if database_url.contains(":memory:") {
        AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let database = options.connect(database_url).await?;
    schema::migrate(&database, backend).await?;
    Ok(database)
}

/// Fetches every stored score, best first.
pub async fn list_scores(database: &DatabasePool) -> Result<Leaderboard<ScoreEntry>, RequestError> {
    let rows = sqlx::query("SELECT id, score, player_name, creation_date FROM scores")
        .fetch_all(database)
        .await?;

    let scores = rows
        .iter()
        .map(decode_entry)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Leaderboard::new(scores))
}

/// Stores a new score and returns it with its generated id.
pub async fn insert_score(
    database: &DatabasePool,
    new_score: NewScore,
) -> Result<ScoreEntry, RequestError> {
    let creation_date = new_score.creation_date.unwrap_or_else(Utc::now);

    let row = sqlx::query(
        "INSERT INTO scores (score, player_name, creation_date) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(i64::from(new_score.score))
    .bind(new_score.player_name.as_str())
    .bind(creation_date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    .fetch_one(database)
    .await?;

    let id = row.try_get::<ScoreId, _>("id")?;
    Ok(new_score.into_entry(id, creation_date))
}

fn decode_entry(row: &AnyRow) -> Result<ScoreEntry, RequestError> {
    let id = row.try_get::<ScoreId, _>("id")?;
    let corrupt = |reason: String| RequestError::CorruptRow { id, reason };

    let score = row.try_get::<i64, _>("score")?;
    let score = GameScore::try_from(score).map_err(|_| corrupt(format!("score {} out of range", score)))?;

    let creation_date = row.try_get::<String, _>("creation_date")?;
    let creation_date = DateTime::parse_from_rfc3339(&creation_date)
        .map_err(|error| corrupt(format!("creation date {:?}: {}", creation_date, error)))?
        .with_timezone(&Utc);

    Ok(ScoreEntry {
        id,
        score,
        player_name: row.try_get::<String, _>("player_name")?,
        creation_date,
    })
}
