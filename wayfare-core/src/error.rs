/// Error taxonomy shared by every service crate.
///
/// The API layer maps these onto the HTTP response envelope:
/// `Validation` becomes 400, `NotFound` 404, `Store` and `Render` 500.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to render invoice: {0}")]
    Render(String),
}

impl Error {
    /// Wraps a downstream store failure.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
