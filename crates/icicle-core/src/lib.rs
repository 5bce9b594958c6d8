//! Icicle core: turns annotated field descriptors into companion classes
//! that save and restore instance state through an Android `Bundle`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod diagnostic;
pub mod emit;
pub mod error;
pub mod generator;
pub mod hierarchy;
pub mod model;
pub mod resolve;
pub mod sink;
pub mod types;
pub mod validate;

pub use error::Error;

///
/// CONSTANTS
///

/// Crate version, stamped into CLI output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Everything needed to run a batch: config, graph, generator, sinks and
/// reporters.
///

pub mod prelude {
    pub use crate::{
        diagnostic::{CollectingReporter, Diagnostic, Reporter, TracingReporter},
        generator::{GenerateReport, Generator},
        hierarchy::{TypeGraph, TypeNode},
        model::{FieldDescriptor, TypeIdentity},
        sink::{ArtifactSink, FsSink, MemorySink},
    };
    pub use icicle_config_build::GeneratorConfig;
}
