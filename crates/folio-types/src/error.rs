use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the page and section model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The home page cannot be disabled from the editing path
    HomePageLocked,

    /// No page with the given id exists
    UnknownPage(String),

    /// No section with the given id exists
    UnknownSection(String),

    /// A reorder index fell outside the page list
    IndexOutOfRange { index: usize, len: usize },

    /// A section points at a page id that is not in the page list
    DanglingSection { section: String, page: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::HomePageLocked => write!(f, "The home page is always enabled"),
            ModelError::UnknownPage(id) => write!(f, "Unknown page: {}", id),
            ModelError::UnknownSection(id) => write!(f, "Unknown section: {}", id),
            ModelError::IndexOutOfRange { index, len } => {
                write!(f, "Position {} is out of range (list has {} pages)", index, len)
            }
            ModelError::DanglingSection { section, page } => {
                write!(f, "Section '{}' references unknown page '{}'", section, page)
            }
        }
    }
}

impl std::error::Error for ModelError {}
