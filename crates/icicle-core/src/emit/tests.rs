use super::*;
use crate::{
    hierarchy::{AssignabilityChecker, TypeGraph},
    model::{FieldDescriptor, TypeIdentity},
    resolve::TypeCommandResolver,
};

const SUFFIX: &str = "$$Icicle";

fn enrich(owner: &str, fields: &[(&str, &str)]) -> Vec<EnrichedField> {
    let graph = TypeGraph::android();
    let resolver =
        TypeCommandResolver::new(AssignabilityChecker::new(&graph), "android.os.Parcelable");

    fields
        .iter()
        .map(|(name, ty)| {
            EnrichedField::new(FieldDescriptor::new(*name, *ty, owner), resolver.resolve(ty))
        })
        .collect()
}

fn render(
    emitter: CompanionEmitter<'_>,
    owner: &str,
    family: TemplateFamily,
    fields: &[(&str, &str)],
) -> String {
    render_in(emitter, owner, None, family, fields)
}

fn render_in(
    emitter: CompanionEmitter<'_>,
    owner: &str,
    package: Option<&str>,
    family: TemplateFamily,
    fields: &[(&str, &str)],
) -> String {
    let id = TypeIdentity::new(owner);
    let mut out = Vec::new();
    emitter
        .emit(&id.layout(package), family, &enrich(owner, fields), &mut out)
        .expect("in-memory emission cannot fail");

    String::from_utf8(out).expect("generated source is utf-8")
}

#[test]
fn host_family_companion() {
    let source = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.Foo",
        TemplateFamily::Host,
        &[("a", "int"), ("b", "java.lang.String")],
    );

    let expected = r#"// Generated by icicle. Do not modify!
package com.example;

import android.os.Bundle;

public class Foo$$Icicle {
  public static void saveInstanceState(com.example.Foo target, Bundle outState) {
    outState.putInt("a", target.a);
    outState.putString("b", target.b);
  }

  public static void restoreInstanceState(com.example.Foo target, Bundle savedInstanceState) {
    if (savedInstanceState == null) {
      return;
    }
    target.a = savedInstanceState.getInt("a");
    target.b = savedInstanceState.getString("b");
  }
}
"#;
    assert_eq!(source, expected);
}

#[test]
fn view_family_companion_wraps_super_state() {
    let source = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.CounterView",
        TemplateFamily::View,
        &[("x", "android.graphics.Rect")],
    );

    let expected = r#"// Generated by icicle. Do not modify!
package com.example;

import android.os.Bundle;
import android.os.Parcelable;

public class CounterView$$Icicle {
  private static final String SUPER_STATE_KEY = "com.example.CounterView$$Icicle$$SUPER";

  public static Parcelable saveInstanceState(com.example.CounterView target, Parcelable state) {
    Bundle outState = new Bundle();
    outState.putParcelable(SUPER_STATE_KEY, state);
    outState.putParcelable("x", target.x);
    return outState;
  }

  public static Parcelable restoreInstanceState(com.example.CounterView target, Parcelable state) {
    if (!(state instanceof Bundle)) {
      return state;
    }
    Bundle savedInstanceState = (Bundle) state;
    target.x = savedInstanceState.<android.graphics.Rect>getParcelable("x");
    return savedInstanceState.getParcelable(SUPER_STATE_KEY);
  }
}
"#;
    assert_eq!(source, expected);
}

#[test]
fn field_statements_do_not_depend_on_family() {
    let fields = [("x", "android.graphics.Rect"), ("n", "long[]")];
    let host = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.Thing",
        TemplateFamily::Host,
        &fields,
    );
    let view = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.Thing",
        TemplateFamily::View,
        &fields,
    );

    for statement in [
        "outState.putParcelable(\"x\", target.x);",
        "outState.putLongArray(\"n\", target.n);",
        "target.x = savedInstanceState.<android.graphics.Rect>getParcelable(\"x\");",
        "target.n = savedInstanceState.getLongArray(\"n\");",
    ] {
        assert!(host.contains(statement), "host missing {statement}");
        assert!(view.contains(statement), "view missing {statement}");
    }
    assert!(host.contains("Bundle savedInstanceState)"));
    assert!(view.contains("Parcelable state)"));
}

#[test]
fn namespaced_keys_use_base_key_constant() {
    let source = render(
        CompanionEmitter::new(SUFFIX, true),
        "com.example.Foo",
        TemplateFamily::Host,
        &[("count", "java.lang.Integer")],
    );

    assert!(source.contains(
        "private static final String BASE_KEY = \"com.example.Foo$$Icicle.\";"
    ));
    assert!(source.contains("outState.putInt(BASE_KEY + \"count\", target.count);"));
    assert!(source.contains("target.count = savedInstanceState.getInt(BASE_KEY + \"count\");"));
}

#[test]
fn parameterized_retrieval_for_containers_and_objects() {
    let source = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.ListActivity",
        TemplateFamily::Host,
        &[
            ("names", "java.util.ArrayList<java.lang.String>"),
            ("tags", "java.util.HashSet<java.lang.String>"),
            ("extras", "android.os.Bundle"),
        ],
    );

    assert!(source.contains("target.names = savedInstanceState.getStringArrayList(\"names\");"));
    assert!(source.contains(
        "target.tags = (java.util.HashSet<java.lang.String>) savedInstanceState.getSerializable(\"tags\");"
    ));
    assert!(source.contains("target.extras = savedInstanceState.getBundle(\"extras\");"));
}

#[test]
fn boxed_arrays_are_stored_as_serializable() {
    let source = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.Foo",
        TemplateFamily::Host,
        &[("counts", "java.lang.Integer[]"), ("raw", "int[]")],
    );

    assert!(source.contains("outState.putSerializable(\"counts\", target.counts);"));
    assert!(source.contains(
        "target.counts = (java.lang.Integer[]) savedInstanceState.getSerializable(\"counts\");"
    ));
    assert!(source.contains("outState.putIntArray(\"raw\", target.raw);"));
    assert!(!source.contains("putIntArray(\"counts\""));
}

#[test]
fn default_package_and_nested_owner() {
    let plain = render(
        CompanionEmitter::new(SUFFIX, false),
        "Foo",
        TemplateFamily::Host,
        &[("a", "int")],
    );
    assert!(!plain.contains("package "));
    assert!(plain.contains("public class Foo$$Icicle {"));

    let nested = render_in(
        CompanionEmitter::new(SUFFIX, false),
        "com.example.Outer.Inner",
        Some("com.example"),
        TemplateFamily::Host,
        &[("a", "int")],
    );
    assert!(nested.contains("package com.example;"));
    assert!(nested.contains("public class Outer$Inner$$Icicle {"));
    assert!(nested.contains("saveInstanceState(com.example.Outer.Inner target, Bundle outState)"));
}

#[test]
fn package_comes_from_the_owner_name_not_letter_case() {
    let source = render(
        CompanionEmitter::new(SUFFIX, false),
        "com.MyCompany.app.Foo",
        TemplateFamily::Host,
        &[("a", "int")],
    );

    assert!(source.contains("package com.MyCompany.app;"));
    assert!(source.contains("public class Foo$$Icicle {"));
    assert!(source.contains("saveInstanceState(com.MyCompany.app.Foo target, Bundle outState)"));
}

#[test]
fn emission_is_deterministic() {
    let fields = [("a", "int"), ("b", "java.lang.String"), ("c", "float[]")];
    let emitter = CompanionEmitter::new(SUFFIX, false);

    let first = render(emitter, "com.example.Foo", TemplateFamily::Host, &fields);
    let second = render(emitter, "com.example.Foo", TemplateFamily::Host, &fields);

    assert_eq!(first.as_bytes(), second.as_bytes());
}

///
/// FailingWriter
/// accepts `budget` bytes, then errors
///

struct FailingWriter {
    budget: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::other("disk full"));
        }
        self.budget -= buf.len();

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_is_propagated() {
    let owner = "com.example.Foo";
    let fields = enrich(owner, &[("a", "int")]);
    let mut out = FailingWriter { budget: 64 };

    let id = TypeIdentity::new(owner);

    let err = CompanionEmitter::new(SUFFIX, false)
        .emit(&id.layout(None), TemplateFamily::Host, &fields, &mut out)
        .expect_err("writer runs out of budget");

    assert_eq!(err.to_string(), "disk full");
}
