//! Generation model: what the driver extracts, enriches and groups.

mod command;
mod field;
mod group;
mod identity;

pub use command::PersistenceCommand;
pub use field::{EnrichedField, FieldDescriptor};
pub use group::ClassGroup;
pub use identity::{ClassLayout, TypeIdentity};
