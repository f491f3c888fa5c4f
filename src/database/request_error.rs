use snake_scores::ScoreId;

#[derive(Debug)]
pub enum RequestError {
    Database(sqlx::Error),
    CorruptRow { id: ScoreId, reason: String },
    UnsupportedDatabase { scheme: String },
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(error) => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(error) => write!(f, "database error: {}", error),
            Self::CorruptRow { id, reason } => {
                write!(f, "score with id {} cannot be decoded: {}", id, reason)
            }
            Self::UnsupportedDatabase { scheme } => {
                write!(f, "unsupported database url scheme: {}", scheme)
            }
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database(error)
    }
}

pub type RequestResult<T, E = rocket::response::Debug<RequestError>> = std::result::Result<T, E>;
