use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application.
///
/// Every error is fatal to the run: the first one encountered aborts the
/// remaining stages, and the original cause is kept reachable through
/// [`std::error::Error::source`] for diagnostics.
#[derive(Debug)]
pub enum Error {
    /// A classpath entry does not point at a usable directory
    InvalidClasspathEntry { entry: PathBuf, reason: String },
    /// An explicitly named class is absent or its source is malformed
    ClassResolution { name: String, reason: String },
    /// Enumerating a package directory failed with an I/O error
    PackageScanIo {
        package: String,
        source: std::io::Error,
    },
    /// The output directory is unset, unusable, or could not be created
    OutputDirectory { path: PathBuf, reason: String },
    /// An unrecognized output format value
    UnsupportedFormat(String),
    /// Serializing or writing the final document failed
    Serialization {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidClasspathEntry { entry, reason } => {
                write!(
                    f,
                    "'{}' is an invalid classpath entry: {}",
                    entry.display(),
                    reason
                )
            }
            Error::ClassResolution { name, reason } => {
                write!(f, "Could not resolve class '{}': {}", name, reason)
            }
            Error::PackageScanIo { package, source } => {
                write!(f, "Failed to scan package '{}': {}", package, source)
            }
            Error::OutputDirectory { path, reason } => {
                write!(f, "Output directory '{}': {}", path.display(), reason)
            }
            Error::UnsupportedFormat(value) => {
                write!(f, "Unknown file format '{}'", value)
            }
            Error::Serialization { message, .. } => {
                write!(f, "Could not generate swagger file: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PackageScanIo { source, .. } => Some(source),
            Error::Serialization {
                source: Some(cause),
                ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: format!("JSON serialization error: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization {
            message: format!("YAML serialization error: {}", err),
            source: Some(Box::new(err)),
        }
    }
}
