use crate::types::{CommandKind, RetrievalStyle};
use serde::Serialize;
use std::fmt;

///
/// PersistenceCommand
///
/// A catalog entry plus, for object/container/array commands, the type
/// argument the retrieval call is parameterized with. For the generic object
/// command the retrieval is an unchecked cast: a mismatched value fails at
/// restoration time, not here.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct PersistenceCommand {
    pub kind: CommandKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_argument: Option<String>,
}

impl PersistenceCommand {
    #[must_use]
    pub const fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            type_argument: None,
        }
    }

    #[must_use]
    pub fn with_type(kind: CommandKind, type_argument: impl Into<String>) -> Self {
        Self {
            kind,
            type_argument: Some(type_argument.into()),
        }
    }

    /// Generic object fallback for `type_name`.
    #[must_use]
    pub fn fallback(type_name: &str) -> Self {
        Self::with_type(CommandKind::Serializable, type_name)
    }

    #[must_use]
    pub fn storage_method(&self) -> String {
        format!("put{}", self.kind.accessor())
    }

    #[must_use]
    pub fn retrieval_method(&self) -> String {
        format!("get{}", self.kind.accessor())
    }

    /// Render the retrieval expression against `bundle` for `key`.
    #[must_use]
    pub fn retrieval_expr(&self, bundle: &str, key: &str) -> String {
        let method = self.retrieval_method();
        let style = match &self.type_argument {
            Some(_) => self.kind.retrieval_style(),
            None => RetrievalStyle::Direct,
        };
        let ty = self.type_argument.as_deref().unwrap_or_default();

        match style {
            RetrievalStyle::Direct => format!("{bundle}.{method}({key})"),
            RetrievalStyle::Witness => format!("{bundle}.<{ty}>{method}({key})"),
            RetrievalStyle::Cast => format!("({ty}) {bundle}.{method}({key})"),
            RetrievalStyle::ArrayCast => format!("({ty}[]) {bundle}.{method}({key})"),
        }
    }

    /// Render the storage statement body (without the trailing `;`).
    #[must_use]
    pub fn storage_expr(&self, bundle: &str, key: &str, value: &str) -> String {
        format!("{bundle}.{}({key}, {value})", self.storage_method())
    }
}

impl fmt::Display for PersistenceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_argument {
            Some(ty) => write!(f, "{}<{ty}>", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
