use crate::base;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}'", .path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("invalid transaction data at line {}, column {}", .source.line(), .source.column())]
    Parse { source: serde_json::Error },
    #[error("data source is empty")]
    Empty,
}

/// Where the dashboard's transactions come from.
pub trait Source {
    /// Reads and parses the transactions once.
    fn fetch(&self) -> Result<base::Transactionlist, LoadError>;

    /// Like [`Source::fetch`], except that any failure yields an empty list.
    /// Callers never see the error; it is only logged.
    fn load(&self) -> base::Transactionlist {
        match self.fetch() {
            Ok(tl) => {
                tracing::debug!(count = tl.len(), "loaded transactions");
                tl
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load transactions, continuing with none");
                base::Transactionlist::new()
            }
        }
    }
}

/// Static JSON file holding an array of transactions.
pub struct FileSource {
    path: std::path::PathBuf,
}

impl FileSource {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn fetch(&self) -> Result<base::Transactionlist, LoadError> {
        let s = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        StrSource(&s).fetch()
    }
}

/// In-memory JSON text, for data that has already been read.
pub struct StrSource<'a>(pub &'a str);

impl Source for StrSource<'_> {
    fn fetch(&self) -> Result<base::Transactionlist, LoadError> {
        if self.0.trim().is_empty() {
            return Err(LoadError::Empty);
        }
        self.0.parse().map_err(|source| LoadError::Parse { source })
    }
}
