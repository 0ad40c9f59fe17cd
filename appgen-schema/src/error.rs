//! Error types for application loading.

use thiserror::Error;

/// Error type for application parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required element.
    #[error("missing required element '{element}' in '{context}'")]
    MissingElement {
        /// Element name.
        element: String,
        /// Parent element name.
        context: String,
    },

    /// Element content that does not parse as the expected value.
    #[error("invalid value '{value}' in element '{element}'")]
    InvalidValue {
        /// Element name.
        element: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates a missing element error.
    pub fn missing_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(element: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = ParseError::missing_element("Guid", "Application");
        assert_eq!(
            err.to_string(),
            "missing required element 'Guid' in 'Application'"
        );
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ParseError::invalid_value("FieldTypeId", "abc");
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("FieldTypeId"));
    }
}
