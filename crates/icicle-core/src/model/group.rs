use crate::{
    model::{EnrichedField, TypeIdentity},
    types::TemplateFamily,
};
use std::collections::BTreeSet;

///
/// ClassGroup
///
/// Fields of one owner in first-discovery order, unique by name. The
/// template family is resolved at most once. The owner's package is the
/// first one declared by any of its fields.
///

#[derive(Clone, Debug)]
pub struct ClassGroup {
    owner: TypeIdentity,
    package: Option<String>,
    fields: Vec<EnrichedField>,
    names: BTreeSet<String>,
    family: Option<TemplateFamily>,
}

impl ClassGroup {
    #[must_use]
    pub const fn new(owner: TypeIdentity) -> Self {
        Self {
            owner,
            package: None,
            fields: Vec::new(),
            names: BTreeSet::new(),
            family: None,
        }
    }

    #[must_use]
    pub const fn owner(&self) -> &TypeIdentity {
        &self.owner
    }

    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Record a declared package unless one is already known.
    pub fn declare_package(&mut self, package: Option<&str>) {
        if self.package.is_none() {
            self.package = package.map(str::to_string);
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[EnrichedField] {
        &self.fields
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a field; a repeated name keeps the first occurrence.
    /// Returns whether the field was added.
    pub fn insert(&mut self, field: EnrichedField) -> bool {
        debug_assert_eq!(
            field.owner(),
            &self.owner,
            "field '{}' grouped under a foreign owner",
            field.name()
        );

        if !self.names.insert(field.name().to_string()) {
            return false;
        }
        self.fields.push(field);

        true
    }

    /// Resolve the template family once, caching the result.
    pub fn family_with<F>(&mut self, classify: F) -> TemplateFamily
    where
        F: FnOnce(&TypeIdentity) -> TemplateFamily,
    {
        *self.family.get_or_insert_with(|| classify(&self.owner))
    }

    #[must_use]
    pub const fn family(&self) -> Option<TemplateFamily> {
        self.family
    }
}

impl<'a> IntoIterator for &'a ClassGroup {
    type Item = &'a EnrichedField;
    type IntoIter = std::slice::Iter<'a, EnrichedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
