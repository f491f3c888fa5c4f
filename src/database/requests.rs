use super::*;

/// Returns every score in the database, highest first.
#[get("/api/scores")]
pub async fn get_scores(
    database: &State<DatabasePool>,
) -> RequestResult<Json<Leaderboard<ScoreEntry>>> {
    let scores = list_scores(database.inner()).await?;
    Ok(Json(scores))
}

/// Adds a score to the database and returns the stored record.
/// Nothing about the submission is validated; resubmitting creates a new row.
#[post("/api/scores", format = "json", data = "<new_score>")]
pub async fn add_score(
    new_score: Json<NewScore>,
    database: &State<DatabasePool>,
) -> RequestResult<Json<ScoreEntry>> {
    let entry = insert_score(database.inner(), new_score.into_inner()).await?;
    ::log::info!(
        "stored score {} for {} with id {}",
        entry.score,
        entry.player_name,
        entry.id
    );
    Ok(Json(entry))
}
