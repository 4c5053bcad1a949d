/// Pool construction and migrations
pub mod connection;
/// Row types and their queries
pub mod models;

use thiserror::Error;

/// Data-access failures, split by what the caller can do about them.
///
/// `Constraint` is user-reportable (a duplicate name, a taken date);
/// `Unavailable` is transient and worth retrying or surfacing as an outage.
/// The data layer never retries or reconnects on its own.
#[derive(Debug, Error)]
pub enum DbError {
    /// A uniqueness or foreign-key rule rejected the write.
    #[error("constraint violation: {0}")]
    Constraint(#[source] sqlx::Error),
    /// The database could not be reached.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    /// Anything else the driver reports.
    #[error(transparent)]
    Other(sqlx::Error),
}

impl DbError {
    /// True for uniqueness/foreign-key rejections.
    pub fn is_constraint(&self) -> bool {
        matches!(self, DbError::Constraint(_))
    }

    /// True for connectivity failures.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DbError::Unavailable(_))
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) => {
                // SQLite extended constraint codes all carry primary code 19.
                let constraint = db
                    .code()
                    .and_then(|code| code.parse::<u32>().ok())
                    .is_some_and(|code| code & 0xff == 19);
                if constraint {
                    DbError::Constraint(err)
                } else {
                    DbError::Other(err)
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => DbError::Unavailable(err),
            _ => DbError::Other(err),
        }
    }
}
