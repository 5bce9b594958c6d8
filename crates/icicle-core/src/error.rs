use crate::{model::TypeIdentity, types::Modifier};
use std::io;
use thiserror::Error as ThisError;

///
/// Error
///
/// Failure of a whole class group. Never aborts a batch; the generator turns
/// each one into a diagnostic against the owner. Field-level problems are
/// [`ValidationError`]s and are reported directly.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Sink(#[from] SinkError),
}

///
/// ValidationError
/// field-level accessibility violation
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("field '{field}' must not be private, static or final (found: {})", join(.violations))]
pub struct ValidationError {
    pub owner: TypeIdentity,
    pub field: String,
    pub violations: Vec<Modifier>,
}

fn join(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

///
/// SinkError
/// the artifact for one class group could not be produced
///

#[derive(Debug, ThisError)]
pub enum SinkError {
    #[error("impossible to create '{artifact}': {source}")]
    Create {
        artifact: String,
        #[source]
        source: io::Error,
    },

    #[error("impossible to write '{artifact}': {source}")]
    Write {
        artifact: String,
        #[source]
        source: io::Error,
    },

    #[error("impossible to commit '{artifact}': {source}")]
    Commit {
        artifact: String,
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    #[must_use]
    pub fn artifact(&self) -> &str {
        match self {
            Self::Create { artifact, .. }
            | Self::Write { artifact, .. }
            | Self::Commit { artifact, .. } => artifact,
        }
    }
}
