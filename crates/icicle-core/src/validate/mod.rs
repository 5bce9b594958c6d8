//! Field accessibility rules re-checked by the core.

use crate::{error::ValidationError, model::FieldDescriptor, types::Modifier};

/// Modifiers that make a field unreachable from its companion.
pub const FORBIDDEN_MODIFIERS: [Modifier; 3] =
    [Modifier::Private, Modifier::Static, Modifier::Final];

/// A field must be an instance field, assignable after construction and
/// visible outside its own compilation unit. All violations of one field are
/// reported as a single error.
pub fn validate_field(field: &FieldDescriptor) -> Result<(), ValidationError> {
    let violations: Vec<Modifier> = FORBIDDEN_MODIFIERS
        .into_iter()
        .filter(|modifier| field.has_modifier(*modifier))
        .collect();

    if violations.is_empty() {
        return Ok(());
    }

    Err(ValidationError {
        owner: field.enclosing_type.clone(),
        field: field.name.clone(),
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FieldDescriptor {
        FieldDescriptor::new("count", "int", "com.example.Foo")
    }

    #[test]
    fn instance_fields_pass() {
        assert_eq!(validate_field(&field()), Ok(()));
    }

    #[test]
    fn each_forbidden_modifier_is_rejected() {
        for modifier in FORBIDDEN_MODIFIERS {
            let err = validate_field(&field().with_modifier(modifier))
                .expect_err("forbidden modifier must fail");

            assert_eq!(err.violations, vec![modifier]);
            assert_eq!(err.field, "count");
            assert_eq!(err.owner.as_str(), "com.example.Foo");
        }
    }

    #[test]
    fn multiple_violations_collapse_into_one_error() {
        let err = validate_field(
            &field()
                .with_modifier(Modifier::Static)
                .with_modifier(Modifier::Final),
        )
        .expect_err("static final must fail");

        assert_eq!(err.violations, vec![Modifier::Static, Modifier::Final]);
        assert_eq!(
            err.to_string(),
            "field 'count' must not be private, static or final (found: static, final)"
        );
    }
}
