use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

///
/// TypeIdentity
/// fully-qualified (canonical) name of a declared type
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TypeIdentity(String);

impl TypeIdentity {
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let name: String = qualified_name.into();

        Self(name.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into package and class path. `package` is the declared package
    /// when known (`Some("")` for the default package); otherwise the last
    /// segment is taken as the class.
    #[must_use]
    pub fn layout(&self, package: Option<&str>) -> ClassLayout<'_> {
        let name = self.0.as_str();

        match package.map(str::trim) {
            Some("") => ClassLayout::new(name, None, name),
            Some(package) => match name
                .strip_prefix(package)
                .and_then(|rest| rest.strip_prefix('.'))
            {
                Some(class_path) if !class_path.is_empty() => {
                    ClassLayout::new(name, Some(&name[..package.len()]), class_path)
                }
                _ => {
                    tracing::debug!(
                        owner = name,
                        package,
                        "declared package is not a prefix of the owner, ignored"
                    );
                    Self::last_segment(name)
                }
            },
            None => Self::last_segment(name),
        }
    }

    fn last_segment(name: &str) -> ClassLayout<'_> {
        match name.rsplit_once('.') {
            Some((package, class)) => ClassLayout::new(name, Some(package), class),
            None => ClassLayout::new(name, None, name),
        }
    }
}

///
/// ClassLayout
///
/// Package / class-path view of a [`TypeIdentity`]. Nested classes keep
/// their outer segments in the class path (`Outer.Inner`).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClassLayout<'a> {
    qualified: &'a str,
    package: Option<&'a str>,
    class_path: &'a str,
}

impl<'a> ClassLayout<'a> {
    const fn new(qualified: &'a str, package: Option<&'a str>, class_path: &'a str) -> Self {
        Self {
            qualified,
            package,
            class_path,
        }
    }

    #[must_use]
    pub const fn qualified(&self) -> &'a str {
        self.qualified
    }

    /// Package portion, `None` for the default package.
    #[must_use]
    pub const fn package(&self) -> Option<&'a str> {
        self.package
    }

    #[must_use]
    pub const fn class_path(&self) -> &'a str {
        self.class_path
    }

    #[must_use]
    pub fn simple_name(&self) -> &'a str {
        self.class_path
            .rsplit_once('.')
            .map_or(self.class_path, |(_, name)| name)
    }

    /// Simple name of the generated companion (`Outer$Inner<suffix>`).
    #[must_use]
    pub fn companion_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.class_path.replace('.', "$"))
    }

    /// Qualified name of the generated companion artifact. For top-level
    /// classes this is the qualified name followed by `suffix`.
    #[must_use]
    pub fn artifact_name(&self, suffix: &str) -> String {
        let companion = self.companion_name(suffix);

        match self.package {
            Some(package) => format!("{package}.{companion}"),
            None => companion,
        }
    }
}

impl AsRef<str> for TypeIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeIdentity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeIdentity {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
