use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type Result<T, E = RouterError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid base url: {0}")]
    InvalidBase(#[source] url::ParseError),

    #[error("malformed request path {path:?}: {reason}")]
    MalformedRequestPath {
        path: String,
        #[source]
        reason: PathError,
    },

    #[error("middleware failed: {0}")]
    Handler(#[source] BoxError),

    /// A middleware invoked its `next` continuation more than once.
    #[error("next() called more than once in a single middleware invocation")]
    ReentrantNext,
}

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),

    #[error("invalid percent escape in segment {segment:?}")]
    InvalidEscape { segment: String },

    #[error("segment {segment:?} does not decode to utf-8")]
    InvalidUtf8 { segment: String },
}

impl RouterError {
    pub fn handler(err: impl Into<BoxError>) -> Self {
        Self::Handler(err.into())
    }

    pub(crate) fn malformed(path: &str, reason: impl Into<PathError>) -> Self {
        Self::MalformedRequestPath {
            path: path.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Self::MalformedRequestPath { .. })
    }
}

impl From<BoxError> for RouterError {
    fn from(err: BoxError) -> Self {
        Self::Handler(err)
    }
}
