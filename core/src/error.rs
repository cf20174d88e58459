use crate::DocId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("corpus import failed: {0}")]
    Import(String),

    #[error("normalization failed for document {doc_id}: {reason}")]
    Normalization { doc_id: DocId, reason: String },

    #[error("index build failed: {0}")]
    IndexBuild(String),

    #[error("document not found: {0}")]
    DocumentNotFound(DocId),

    #[error("term not found: {0}")]
    TermNotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Lookup misses; callers decide how to present them.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DocumentNotFound(_) | Error::TermNotFound(_))
    }

    /// Errors after which the derived state can no longer be trusted to track the documents.
    pub fn is_fatal(&self) -> bool {
        !self.is_not_found()
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Import(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::DocumentNotFound(42);
        assert_eq!(err.to_string(), "document not found: 42");
        let err = Error::Normalization { doc_id: 7, reason: "bad rule".into() };
        assert_eq!(err.to_string(), "normalization failed for document 7: bad rule");
    }

    #[test]
    fn not_found_is_not_fatal() {
        assert!(Error::TermNotFound("cat".into()).is_not_found());
        assert!(!Error::TermNotFound("cat".into()).is_fatal());
        assert!(Error::IndexBuild("overflow".into()).is_fatal());
        assert!(Error::Import("missing file".into()).is_fatal());
    }
}
