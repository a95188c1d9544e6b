pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SVG: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("failed to parse viewBox: invalid viewBox format: {0}")]
    InvalidViewBox(String),

    #[error("no viewBox or width/height found")]
    MissingViewBox,

    #[error("viewBox must have a positive size (got {width}x{height})")]
    DegenerateViewBox { width: f64, height: f64 },

    #[error("no parseable content found")]
    NoContent,

    #[error("{path}: {source}")]
    InFile {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid analysis options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("invalid analysis options: {0}")]
    InvalidOptions(String),
}

impl Error {
    pub(crate) fn in_file(path: impl Into<String>, source: Error) -> Self {
        match source {
            // Already attributed; don't nest the path twice.
            Error::InFile { .. } => source,
            other => Error::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// The failure itself, without the file attribution added by [`Error::InFile`].
    pub fn reason(&self) -> &Error {
        match self {
            Error::InFile { source, .. } => source.reason(),
            other => other,
        }
    }
}
