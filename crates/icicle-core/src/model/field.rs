use crate::{
    model::{PersistenceCommand, TypeIdentity},
    types::Modifier,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// FieldDescriptor
///
/// One annotated field as handed over by the discovery collaborator.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    pub enclosing_type: TypeIdentity,

    /// Declared package of `enclosing_type` (`""` for the default package).
    /// When absent the last segment of the qualified name is the class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub modifiers: BTreeSet<Modifier>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        enclosing_type: impl Into<TypeIdentity>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            enclosing_type: enclosing_type.into(),
            package: None,
            modifiers: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

///
/// EnrichedField
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnrichedField {
    pub descriptor: FieldDescriptor,
    pub command: PersistenceCommand,
}

impl EnrichedField {
    #[must_use]
    pub const fn new(descriptor: FieldDescriptor, command: PersistenceCommand) -> Self {
        Self {
            descriptor,
            command,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    #[must_use]
    pub const fn owner(&self) -> &TypeIdentity {
        &self.descriptor.enclosing_type
    }
}
