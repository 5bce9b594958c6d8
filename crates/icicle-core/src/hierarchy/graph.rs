use crate::model::TypeIdentity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// TypeNode
/// one declared type and its direct supertype edges
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeNode {
    pub name: TypeIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<TypeIdentity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeIdentity>,
}

impl TypeNode {
    #[must_use]
    pub fn new(name: impl Into<TypeIdentity>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, superclass: impl Into<TypeIdentity>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<TypeIdentity>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Superclass edge first, then interfaces in declaration order.
    pub fn supertypes(&self) -> impl Iterator<Item = &TypeIdentity> {
        self.superclass.iter().chain(&self.interfaces)
    }
}

///
/// TypeGraph
///
/// Declared-type graph of the current compilation. Types missing from the
/// graph are simply unknown; lookups never fail.
///

#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    nodes: BTreeMap<TypeIdentity, TypeNode>,
}

impl TypeGraph {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Graph seeded with the framework types the generator relies on.
    #[must_use]
    pub fn android() -> Self {
        const PARCELABLE: &str = "android.os.Parcelable";
        const OBJECT: &str = "java.lang.Object";

        let mut graph = Self::new();

        graph.insert(TypeNode::new(OBJECT));
        graph.insert(TypeNode::new(PARCELABLE));
        graph.insert(TypeNode::new("java.io.Serializable"));
        graph.insert(TypeNode::new("android.os.BaseBundle").extends(OBJECT));
        graph.insert(
            TypeNode::new("android.os.Bundle")
                .extends("android.os.BaseBundle")
                .implements(PARCELABLE)
                .implements("java.lang.Cloneable"),
        );
        for geometry in [
            "android.graphics.Point",
            "android.graphics.PointF",
            "android.graphics.Rect",
            "android.graphics.RectF",
        ] {
            graph.insert(TypeNode::new(geometry).extends(OBJECT).implements(PARCELABLE));
        }

        // lifecycle owners
        graph.insert(TypeNode::new("android.content.Context").extends(OBJECT));
        graph.insert(
            TypeNode::new("android.content.ContextWrapper").extends("android.content.Context"),
        );
        graph.insert(
            TypeNode::new("android.view.ContextThemeWrapper")
                .extends("android.content.ContextWrapper"),
        );
        graph.insert(
            TypeNode::new("android.app.Activity").extends("android.view.ContextThemeWrapper"),
        );
        graph.insert(TypeNode::new("android.app.Fragment").extends(OBJECT));
        graph.insert(TypeNode::new("android.view.View").extends(OBJECT));
        graph.insert(TypeNode::new("android.view.ViewGroup").extends("android.view.View"));
        for (widget, parent) in [
            ("android.widget.TextView", "android.view.View"),
            ("android.widget.ImageView", "android.view.View"),
            ("android.widget.FrameLayout", "android.view.ViewGroup"),
            ("android.widget.LinearLayout", "android.view.ViewGroup"),
            ("android.widget.RelativeLayout", "android.view.ViewGroup"),
        ] {
            graph.insert(TypeNode::new(widget).extends(parent));
        }

        graph
    }

    /// Insert or replace a node.
    pub fn insert(&mut self, node: TypeNode) {
        self.nodes.insert(node.name.clone(), node);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.nodes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }
}

impl Extend<TypeNode> for TypeGraph {
    fn extend<I: IntoIterator<Item = TypeNode>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}

impl FromIterator<TypeNode> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = TypeNode>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);

        graph
    }
}
