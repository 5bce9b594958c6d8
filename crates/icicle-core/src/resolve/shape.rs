///
/// TypeShape
/// syntactic shape of a type name as written by the compiler
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeShape<'a> {
    /// `E[]`
    Array { element: &'a str },
    /// `Base<A, B, ..>`; wildcard bounds reduced to their upper bound
    Parameterized {
        base: &'a str,
        arguments: Vec<&'a str>,
    },
    Plain(&'a str),
}

impl<'a> TypeShape<'a> {
    #[must_use]
    pub fn parse(type_name: &'a str) -> Self {
        let type_name = type_name.trim();

        if let Some(element) = type_name.strip_suffix("[]") {
            return Self::Array {
                element: element.trim_end(),
            };
        }

        if let Some(inner) = type_name.strip_suffix('>')
            && let Some((base, arguments)) = inner.split_once('<')
        {
            return Self::Parameterized {
                base: base.trim(),
                arguments: split_arguments(arguments).map(upper_bound).collect(),
            };
        }

        Self::Plain(type_name)
    }

    /// Single type argument of `base`, if that is the shape.
    #[must_use]
    pub fn single_argument_of(&self, expected_base: &str) -> Option<&'a str> {
        match self {
            Self::Parameterized { base, arguments } if *base == expected_base => {
                match arguments.as_slice() {
                    [argument] => Some(*argument),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

// split_arguments
// splits on top-level commas only
fn split_arguments(arguments: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    let mut start = 0;
    let mut parts = Vec::new();

    for (idx, c) in arguments.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(arguments[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(arguments[start..].trim());

    parts.into_iter()
}

// upper_bound
// `? extends X` → `X`; other wildcards stay as written
fn upper_bound(argument: &str) -> &str {
    argument
        .strip_prefix('?')
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix("extends "))
        .map_or(argument, str::trim)
}
