//! Static type name → persistence command.
//!
//! Rules are tried in a fixed order and the first match wins; anything left
//! over is persisted through the generic object command. The same type name
//! always resolves to the same command for a given type graph.

mod shape;


pub use shape::TypeShape;

use crate::{hierarchy::AssignabilityChecker, model::PersistenceCommand, types::CommandKind};

const ARRAY_LIST: &str = "java.util.ArrayList";
const SPARSE_ARRAY: &str = "android.util.SparseArray";

///
/// TypeCommandResolver
///

#[derive(Clone, Copy, Debug)]
pub struct TypeCommandResolver<'g> {
    checker: AssignabilityChecker<'g>,
    parcelable_base: &'g str,
}

impl<'g> TypeCommandResolver<'g> {
    #[must_use]
    pub const fn new(checker: AssignabilityChecker<'g>, parcelable_base: &'g str) -> Self {
        Self {
            checker,
            parcelable_base,
        }
    }

    /// Resolve a declared field type. Total: unknown shapes fall back to the
    /// generic object command.
    #[must_use]
    pub fn resolve(&self, type_name: &str) -> PersistenceCommand {
        let type_name = type_name.trim();

        if let Some(kind) = scalar_kind(type_name) {
            return PersistenceCommand::new(kind);
        }
        if let Some(command) = framework_command(type_name) {
            return command;
        }

        let shape = TypeShape::parse(type_name);
        if let Some(command) = self.resolve_shape(&shape) {
            return command;
        }

        if self.checker.is_assignable(type_name, self.parcelable_base) {
            return PersistenceCommand::with_type(CommandKind::Parcelable, type_name);
        }

        PersistenceCommand::fallback(type_name)
    }

    // resolve_shape
    // sets have no bundle accessor and fall through to the object command
    fn resolve_shape(&self, shape: &TypeShape<'_>) -> Option<PersistenceCommand> {
        if let TypeShape::Array { element } = shape {
            if let Some(kind) = array_element_kind(element).and_then(CommandKind::array_of) {
                return Some(PersistenceCommand::new(kind));
            }
            if self.is_parcelable(element) {
                return Some(PersistenceCommand::with_type(
                    CommandKind::ParcelableArray,
                    *element,
                ));
            }

            return None;
        }

        if let Some(element) = shape.single_argument_of(ARRAY_LIST) {
            let command = match self.resolve(element).kind {
                CommandKind::Int => PersistenceCommand::new(CommandKind::IntegerArrayList),
                CommandKind::String => PersistenceCommand::new(CommandKind::StringArrayList),
                CommandKind::CharSequence => {
                    PersistenceCommand::new(CommandKind::CharSequenceArrayList)
                }
                kind if kind.is_parcelable() => {
                    PersistenceCommand::with_type(CommandKind::ParcelableArrayList, element)
                }
                _ => return None,
            };

            return Some(command);
        }

        if let Some(element) = shape.single_argument_of(SPARSE_ARRAY)
            && self.is_parcelable(element)
        {
            return Some(PersistenceCommand::with_type(
                CommandKind::SparseParcelableArray,
                element,
            ));
        }

        None
    }

    // is_parcelable
    // eligibility only; the element's own command is not kept
    fn is_parcelable(&self, element: &str) -> bool {
        self.resolve(element).kind.is_parcelable()
    }
}

// scalar_kind
// primitives and their boxed / java.lang equivalents
fn scalar_kind(type_name: &str) -> Option<CommandKind> {
    let name = type_name.strip_prefix("java.lang.").unwrap_or(type_name);

    let kind = match name {
        "boolean" | "Boolean" => CommandKind::Boolean,
        "byte" | "Byte" => CommandKind::Byte,
        "char" | "Character" => CommandKind::Char,
        "double" | "Double" => CommandKind::Double,
        "float" | "Float" => CommandKind::Float,
        "int" | "Integer" => CommandKind::Int,
        "long" | "Long" => CommandKind::Long,
        "short" | "Short" => CommandKind::Short,
        "String" => CommandKind::String,
        "CharSequence" => CommandKind::CharSequence,
        _ => return None,
    };

    Some(kind)
}

// array_element_kind
// bundles only store arrays of primitives and of String / CharSequence;
// boxed element arrays are left to the object command
fn array_element_kind(element: &str) -> Option<CommandKind> {
    let kind = scalar_kind(element)?;

    match element {
        "boolean" | "byte" | "char" | "double" | "float" | "int" | "long" | "short" => Some(kind),
        _ if matches!(kind, CommandKind::String | CommandKind::CharSequence) => Some(kind),
        _ => None,
    }
}

// framework_command
// well-known framework value types with dedicated commands
fn framework_command(type_name: &str) -> Option<PersistenceCommand> {
    let kind = match type_name {
        "android.os.Bundle" => return Some(PersistenceCommand::new(CommandKind::Bundle)),
        "android.graphics.Point" => CommandKind::Point,
        "android.graphics.PointF" => CommandKind::PointF,
        "android.graphics.Rect" => CommandKind::Rect,
        "android.graphics.RectF" => CommandKind::RectF,
        _ => return None,
    };

    Some(PersistenceCommand::with_type(kind, type_name))
}
