//! Custom error types for SDLDIFF.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line:{line}, unexpected '{{' (nested blocks are not supported)")]
    NestedBlock { line: usize },

    #[error("line:{line}, unexpected '}}'")]
    UnexpectedClose { line: usize },

    #[error("line:{line}, dup: kind={kind}, name={name}, {item}")]
    DuplicateItem {
        line: usize,
        kind: String,
        name: String,
        item: String,
    },

    #[error("line:{line}, unterminated block: kind={kind}, name={name}")]
    UnterminatedBlock {
        line: usize,
        kind: String,
        name: String,
    },
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn nested_block(line: usize) -> Self {
        Self::NestedBlock { line }
    }

    pub fn unexpected_close(line: usize) -> Self {
        Self::UnexpectedClose { line }
    }

    pub fn duplicate_item(
        line: usize,
        kind: impl Into<String>,
        name: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self::DuplicateItem {
            line,
            kind: kind.into(),
            name: name.into(),
            item: item.into(),
        }
    }

    pub fn unterminated_block(line: usize, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnterminatedBlock {
            line,
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Returns the input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::NestedBlock { line }
            | Self::UnexpectedClose { line }
            | Self::DuplicateItem { line, .. }
            | Self::UnterminatedBlock { line, .. } => Some(*line),
            Self::FileNotFound { .. } | Self::ReadError { .. } => None,
        }
    }
}
