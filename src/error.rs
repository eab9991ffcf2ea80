//! Crate-wide error type.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathwayError>;

#[derive(Error, Debug)]
pub enum PathwayError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Activity table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Activity table line {line}: no entity name in first column")]
    MissingEntity { line: u64 },
    #[error("Activity table line {line}, column {column}: '{value}' is not a finite number")]
    InvalidActivity { line: u64, column: usize, value: String },

    #[error("Graph document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Graph document: expected <graph> root element, found <{0}>")]
    UnexpectedRoot(String),
    #[error("Graph document: <{element}> {context} is missing attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        context: String,
    },
    #[error("Graph document: <{element}> attribute '{attribute}' = '{value}' is not a number")]
    InvalidNumber {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
    #[error("unknown shape: {0}")]
    UnknownShape(String),
    #[error("Duplicate node id {0}")]
    DuplicateNode(i64),
    #[error("Edge {from} -> {to} references missing node {missing}")]
    DanglingEdge { from: i64, to: i64, missing: i64 },

    #[error("Style: {0}")]
    Style(#[from] serde_json::Error),
}

impl PathwayError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
