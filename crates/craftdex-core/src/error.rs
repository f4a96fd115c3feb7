//! Error types for the craftdex-core library.
//!
//! All fatal conditions funnel through the single [`Error`] enum; recoverable
//! conditions (a missing local texture, a wiki page without a usable image)
//! never surface here — they degrade to an empty icon string and a log line.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for craftdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error conditions for a pipeline run
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to open the source jar archive
    #[error("failed to open archive '{path}': {source}")]
    ArchiveOpen {
        /// Path to the archive that failed to open
        path: PathBuf,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// Failed to read an entry from the archive
    #[error("failed to read archive entry '{entry}': {details}")]
    ArchiveRead {
        /// Entry path inside the archive
        entry: String,
        /// Detailed description of the failure
        details: String,
    },

    /// Malformed JSON inside the archive
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An ingredient referenced a tag absent from the tag table
    #[error("unknown item tag '{tag}' referenced by a recipe ingredient")]
    MissingTag {
        /// The tag name that could not be resolved
        tag: String,
    },

    /// No localization entry exists for a relevant item
    #[error("cannot find a display name for '{id}'")]
    MissingName {
        /// The item identifier without a name
        id: String,
    },

    /// Failed to fetch a wiki page (the page itself, not its images)
    #[error("failed to fetch wiki page '{url}': {details}")]
    PageFetch {
        /// The page URL that failed
        url: String,
        /// Detailed description of the failure
        details: String,
    },

    /// Failed to read a local file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreate {
        /// Path to the directory that failed to create
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new archive open error
    pub fn archive_open(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::ArchiveOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates a new archive read error
    pub fn archive_read(entry: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ArchiveRead {
            entry: entry.into(),
            details: details.into(),
        }
    }

    /// Creates a new missing tag error
    pub fn missing_tag(tag: impl Into<String>) -> Self {
        Self::MissingTag { tag: tag.into() }
    }

    /// Creates a new missing name error
    pub fn missing_name(id: impl Into<String>) -> Self {
        Self::MissingName { id: id.into() }
    }

    /// Creates a new page fetch error
    pub fn page_fetch(url: impl Into<String>, details: impl Into<String>) -> Self {
        Self::PageFetch {
            url: url.into(),
            details: details.into(),
        }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error reflects inconsistent source data
    /// (as opposed to an I/O or network failure)
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::MissingTag { .. } | Self::MissingName { .. }
        )
    }
}
