use super::*;

/// Backends the `scores` table can be created on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Result<Self, RequestError> {
        let scheme = database_url
            .split_once(':')
            .map_or(database_url, |(scheme, _)| scheme);
        match scheme {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(RequestError::UnsupportedDatabase {
                scheme: scheme.to_owned(),
            }),
        }
    }

    fn create_scores_table(self) -> &'static str {
        match self {
            Self::Sqlite => {
                "CREATE TABLE IF NOT EXISTS scores (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    score BIGINT NOT NULL,
                    player_name TEXT NOT NULL,
                    creation_date TEXT NOT NULL
                )"
            }
            Self::Postgres => {
                "CREATE TABLE IF NOT EXISTS scores (
                    id BIGSERIAL PRIMARY KEY,
                    score BIGINT NOT NULL,
                    player_name TEXT NOT NULL,
                    creation_date TEXT NOT NULL
                )"
            }
        }
    }
}

/// Creates the `scores` table unless it already exists.
pub async fn migrate(database: &DatabasePool, backend: Backend) -> Result<(), RequestError> {
    sqlx::query(backend.create_scores_table())
        .execute(database)
        .await?;
    Ok(())
}
