//! Error types and utilities for igraph

use thiserror::Error;

/// Result type alias for igraph operations
pub type Result<T> = std::result::Result<T, IGraphError>;

/// Main error type for igraph operations
#[derive(Error, Debug)]
pub enum IGraphError {
    /// Input table is missing a required column
    #[error("Schema error: {message}")]
    Schema {
        message: String,
        column: Option<String>,
    },

    /// Configuration related errors (bad unit, comparator, offset, location)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filtering left nothing to group or plot
    #[error("Empty result: {message}")]
    EmptyResult { message: String },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl IGraphError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            column: None,
        }
    }

    /// Create a new schema error naming the offending column
    pub fn schema_column(msg: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            column: Some(column.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new empty-result error
    pub fn empty_result(msg: impl Into<String>) -> Self {
        Self::EmptyResult {
            message: msg.into(),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to IGraphError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for IGraphError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = IGraphError::new("test message");
        assert!(error.to_string().contains("test message"));

        let schema_error = IGraphError::schema_column("missing start column", "start_time");
        assert!(schema_error.to_string().contains("Schema error"));
        assert!(schema_error.to_string().contains("missing start column"));

        let config_error = IGraphError::config("bad comparator");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("bad comparator"));

        let empty_error = IGraphError::empty_result("no rows survived");
        assert!(empty_error.to_string().contains("Empty result"));
        assert!(empty_error.to_string().contains("no rows survived"));

        let graph_error = IGraphError::graph("render failed");
        assert!(graph_error.to_string().contains("Graph error"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = IGraphError::with_source("Failed to write chart", io_error);

        assert!(wrapped_error.to_string().contains("Failed to write chart"));
        assert!(wrapped_error.source().is_some());

        let config_source_error = IGraphError::config_with_source(
            "Bad configuration",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let igraph_error: IGraphError = io_error.into();

        assert!(igraph_error.to_string().contains("I/O error"));
        assert!(igraph_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let igraph_error: IGraphError = serde_error.into();

        assert!(igraph_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_variant_matching() {
        assert!(matches!(
            IGraphError::schema("x"),
            IGraphError::Schema { .. }
        ));
        assert!(matches!(
            IGraphError::config("x"),
            IGraphError::Config { .. }
        ));
        assert!(matches!(
            IGraphError::empty_result("x"),
            IGraphError::EmptyResult { .. }
        ));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(IGraphError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
