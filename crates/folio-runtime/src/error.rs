use crate::image::ImageError;
use crate::store::StoreError;
use crate::wizard::WizardError;
use folio_types::ModelError;
use std::fmt;

/// Result type for folio-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Key-value store failure surfaced by an explicit operation (e.g. reset)
    Store(StoreError),

    /// Page or section model rejected an edit
    Model(ModelError),

    /// Image file was rejected
    Image(ImageError),

    /// Builder wizard could not finish
    Wizard(WizardError),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Storage error: {}", err),
            Error::Model(err) => write!(f, "{}", err),
            Error::Image(err) => write!(f, "{}", err),
            Error::Wizard(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Model(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Wizard(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store(err)
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        Error::Model(err)
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<WizardError> for Error {
    fn from(err: WizardError) -> Self {
        Error::Wizard(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<folio_core::Error> for Error {
    fn from(err: folio_core::Error) -> Self {
        match err {
            folio_core::Error::Io(err) => Error::Io(err),
            folio_core::Error::Config(msg) => Error::Config(msg),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
