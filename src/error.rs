use thiserror::Error;

/// Errors surfaced by the contact store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached or refused the credentials.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// A phone was attached to a client that does not exist.
    #[error("Client {client_id} does not exist")]
    ReferentialIntegrity { client_id: i32 },

    /// A search was requested without any criteria.
    #[error("Malformed query: {0}")]
    MalformedQuery(&'static str),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

const FOREIGN_KEY_VIOLATION: &str = "23503";

impl StoreError {
    /// Classifies a driver error raised while inserting a phone for `client_id`.
    pub(crate) fn from_phone_insert(err: sqlx::Error, client_id: i32) -> Self {
        if sqlstate(&err).as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return StoreError::ReferentialIntegrity { client_id };
        }
        StoreError::from(err)
    }
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}

/// Connection exceptions (08), invalid authorization (28) and unknown database (3D000).
fn is_connection_sqlstate(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("28") || code == "3D000"
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Connection(err),
            sqlx::Error::Database(_) => match sqlstate(&err) {
                Some(code) if is_connection_sqlstate(&code) => StoreError::Connection(err),
                _ => StoreError::Database(err),
            },
            _ => StoreError::Database(err),
        }
    }
}
