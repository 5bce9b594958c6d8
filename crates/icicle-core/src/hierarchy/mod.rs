//! Declared-type graph and assignability checks.

mod graph;


pub use graph::{TypeGraph, TypeNode};

use crate::{model::TypeIdentity, types::TemplateFamily};
use std::collections::BTreeSet;

/// Strip type arguments: `a.B<C>` → `a.B`.
#[must_use]
pub fn erasure(type_name: &str) -> &str {
    let type_name = type_name.trim();

    type_name
        .split_once('<')
        .map_or(type_name, |(base, _)| base.trim_end())
}

///
/// AssignabilityChecker
///

#[derive(Clone, Copy, Debug)]
pub struct AssignabilityChecker<'g> {
    graph: &'g TypeGraph,
}

impl<'g> AssignabilityChecker<'g> {
    #[must_use]
    pub const fn new(graph: &'g TypeGraph) -> Self {
        Self { graph }
    }

    #[must_use]
    pub const fn graph(&self) -> &'g TypeGraph {
        self.graph
    }

    /// Whether `type_name` is `target` or declares it somewhere in its
    /// superclass / interface closure. Unknown types end their edge without
    /// aborting the walk.
    #[must_use]
    pub fn is_assignable(&self, type_name: &str, target: &str) -> bool {
        let mut visited = BTreeSet::new();

        self.walk(erasure(type_name), erasure(target), &mut visited)
    }

    /// Pick the lifecycle template for `owner`.
    #[must_use]
    pub fn family_of<S: AsRef<str>>(
        &self,
        owner: &TypeIdentity,
        view_bases: &[S],
    ) -> TemplateFamily {
        if view_bases
            .iter()
            .any(|base| self.is_assignable(owner.as_str(), base.as_ref()))
        {
            TemplateFamily::View
        } else {
            TemplateFamily::Host
        }
    }

    fn walk<'a>(
        &'a self,
        type_name: &'a str,
        target: &str,
        visited: &mut BTreeSet<&'a str>,
    ) -> bool {
        if type_name == target {
            return true;
        }
        if !visited.insert(type_name) {
            return false;
        }

        let Some(node) = self.graph.get(type_name) else {
            tracing::trace!(
                type_name,
                target,
                "type not in graph, edge treated as non-match"
            );
            return false;
        };

        node.supertypes()
            .any(|parent| self.walk(erasure(parent.as_str()), target, visited))
    }
}
