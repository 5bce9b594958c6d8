//! JSON model file: declared types plus the annotated fields to persist.

use icicle_core::{
    hierarchy::{TypeGraph, TypeNode},
    model::FieldDescriptor,
};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ModelError
///

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("failed to read model '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse model '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

///
/// Model
///

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Model {
    pub types: Vec<TypeNode>,
    pub fields: Vec<FieldDescriptor>,
}

impl Model {
    pub fn parse(source: &str, path: &Path) -> Result<Self, ModelError> {
        serde_json::from_str(source).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let source = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&source, path)
    }

    /// Split into the stock Android graph extended with the model's own
    /// types, and the field list. Model types override stock entries.
    #[must_use]
    pub fn into_parts(self) -> (TypeGraph, Vec<FieldDescriptor>) {
        let mut graph = TypeGraph::android();
        graph.extend(self.types);

        (graph, self.fields)
    }
}
