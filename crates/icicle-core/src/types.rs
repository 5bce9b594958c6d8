use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// CommandKind
///
/// Closed catalog of persistence commands. The variant name doubles as the
/// bundle accessor suffix (`put<Kind>` / `get<Kind>`) except for the
/// framework geometric types, which travel through the parcelable accessor.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[remain::sorted]
pub enum CommandKind {
    Boolean,
    BooleanArray,
    Bundle,
    Byte,
    ByteArray,
    Char,
    CharArray,
    CharSequence,
    CharSequenceArray,
    CharSequenceArrayList,
    Double,
    DoubleArray,
    Float,
    FloatArray,
    Int,
    IntArray,
    IntegerArrayList,
    Long,
    LongArray,
    Parcelable,
    ParcelableArray,
    ParcelableArrayList,
    Point,
    PointF,
    Rect,
    RectF,
    Serializable,
    Short,
    ShortArray,
    SparseParcelableArray,
    String,
    StringArray,
    StringArrayList,
}

impl CommandKind {
    /// Bundle accessor suffix shared by the storage and retrieval methods.
    #[must_use]
    pub const fn accessor(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::BooleanArray => "BooleanArray",
            Self::Bundle => "Bundle",
            Self::Byte => "Byte",
            Self::ByteArray => "ByteArray",
            Self::Char => "Char",
            Self::CharArray => "CharArray",
            Self::CharSequence => "CharSequence",
            Self::CharSequenceArray => "CharSequenceArray",
            Self::CharSequenceArrayList => "CharSequenceArrayList",
            Self::Double => "Double",
            Self::DoubleArray => "DoubleArray",
            Self::Float => "Float",
            Self::FloatArray => "FloatArray",
            Self::Int => "Int",
            Self::IntArray => "IntArray",
            Self::IntegerArrayList => "IntegerArrayList",
            Self::Long => "Long",
            Self::LongArray => "LongArray",
            Self::Parcelable | Self::Point | Self::PointF | Self::Rect | Self::RectF => {
                "Parcelable"
            }
            Self::ParcelableArray => "ParcelableArray",
            Self::ParcelableArrayList => "ParcelableArrayList",
            Self::Serializable => "Serializable",
            Self::Short => "Short",
            Self::ShortArray => "ShortArray",
            Self::SparseParcelableArray => "SparseParcelableArray",
            Self::String => "String",
            Self::StringArray => "StringArray",
            Self::StringArrayList => "StringArrayList",
        }
    }

    /// One-dimensional array command for a scalar command.
    #[must_use]
    pub const fn array_of(self) -> Option<Self> {
        let kind = match self {
            Self::Boolean => Self::BooleanArray,
            Self::Byte => Self::ByteArray,
            Self::Char => Self::CharArray,
            Self::CharSequence => Self::CharSequenceArray,
            Self::Double => Self::DoubleArray,
            Self::Float => Self::FloatArray,
            Self::Int => Self::IntArray,
            Self::Long => Self::LongArray,
            Self::Short => Self::ShortArray,
            Self::String => Self::StringArray,
            _ => return None,
        };

        Some(kind)
    }

    /// Values stored through a parcelable-compatible accessor.
    #[must_use]
    pub const fn is_parcelable(self) -> bool {
        matches!(
            self,
            Self::Bundle | Self::Parcelable | Self::Point | Self::PointF | Self::Rect | Self::RectF
        )
    }

    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Serializable)
    }

    /// How the retrieval call is parameterized back to the field's type.
    #[must_use]
    pub const fn retrieval_style(self) -> RetrievalStyle {
        match self {
            Self::Parcelable
            | Self::Point
            | Self::PointF
            | Self::Rect
            | Self::RectF
            | Self::ParcelableArrayList
            | Self::SparseParcelableArray => RetrievalStyle::Witness,
            Self::ParcelableArray => RetrievalStyle::ArrayCast,
            Self::Serializable => RetrievalStyle::Cast,
            _ => RetrievalStyle::Direct,
        }
    }
}

///
/// RetrievalStyle
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetrievalStyle {
    /// `bundle.getX(key)`
    Direct,
    /// `bundle.<T>getX(key)`
    Witness,
    /// `(T) bundle.getX(key)`; unchecked
    Cast,
    /// `(T[]) bundle.getX(key)`; unchecked
    ArrayCast,
}

///
/// TemplateFamily
///
/// Lifecycle-hook shape a companion implements, chosen by owner ancestry.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize,
)]
pub enum TemplateFamily {
    /// activity / fragment owners: hooks receive the bundle directly
    #[default]
    Host,
    /// view owners: hooks wrap and unwrap the parent's parcelable state
    View,
}

///
/// Modifier
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum Modifier {
    #[display("final")]
    Final,
    #[display("private")]
    Private,
    #[display("static")]
    Static,
}

///
/// Severity
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Severity {
    #[display("note")]
    Note,
    #[display("warning")]
    Warning,
    #[display("error")]
    Error,
}
