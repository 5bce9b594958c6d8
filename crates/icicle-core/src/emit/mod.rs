//! Companion class rendering.
//!
//! Output depends only on the inputs: the same owner, family and field
//! sequence always produce the same bytes.

mod template;
mod writer;

#[cfg(test)]
mod tests;

pub use template::{Guard, LifecycleTemplate};
pub use writer::{SourceWriter, string_literal};

use crate::{
    model::{ClassLayout, EnrichedField},
    types::TemplateFamily,
};
use icicle_config_build::GeneratorConfig;
use std::io::{self, Write};
use template::{BASE_KEY, IN_BUNDLE, OUT_BUNDLE, SUPER_STATE_KEY};

/// First line of every generated unit.
pub const HEADER: &str = "// Generated by icicle. Do not modify!";

///
/// CompanionEmitter
///

#[derive(Clone, Copy, Debug)]
pub struct CompanionEmitter<'c> {
    suffix: &'c str,
    namespace_keys: bool,
}

impl<'c> CompanionEmitter<'c> {
    #[must_use]
    pub const fn new(suffix: &'c str, namespace_keys: bool) -> Self {
        Self {
            suffix,
            namespace_keys,
        }
    }

    #[must_use]
    pub fn from_config(config: &'c GeneratorConfig) -> Self {
        Self::new(&config.suffix, config.namespace_keys)
    }

    #[must_use]
    pub const fn suffix(&self) -> &'c str {
        self.suffix
    }

    /// Render the companion of `owner` into `out`. `fields` must be
    /// non-empty; sink failures are returned as-is.
    pub fn emit<W: Write + ?Sized>(
        &self,
        owner: &ClassLayout<'_>,
        family: TemplateFamily,
        fields: &[EnrichedField],
        out: &mut W,
    ) -> io::Result<()> {
        debug_assert!(!fields.is_empty(), "empty group reached the emitter");

        let template = LifecycleTemplate::for_family(family);
        let artifact = owner.artifact_name(self.suffix);
        let mut w = SourceWriter::new(out);

        // preamble
        w.line(HEADER)?;
        if let Some(package) = owner.package() {
            w.line(&format!("package {package};"))?;
        }
        w.blank()?;
        for import in template.imports {
            w.line(&format!("import {import};"))?;
        }
        w.blank()?;

        w.open(&format!("public class {}", owner.companion_name(self.suffix)))?;

        // constants
        if self.namespace_keys {
            let base = string_literal(&format!("{artifact}."));
            w.line(&format!("private static final String {BASE_KEY} = {base};"))?;
        }
        if template.needs_super_key {
            let key = string_literal(&format!("{artifact}$$SUPER"));
            w.line(&format!("private static final String {SUPER_STATE_KEY} = {key};"))?;
        }
        if self.namespace_keys || template.needs_super_key {
            w.blank()?;
        }

        self.write_save(&mut w, template, owner, fields)?;
        w.blank()?;
        self.write_restore(&mut w, template, owner, fields)?;

        w.close()
    }

    fn write_save<W: Write + ?Sized>(
        &self,
        w: &mut SourceWriter<'_, W>,
        template: &LifecycleTemplate,
        owner: &ClassLayout<'_>,
        fields: &[EnrichedField],
    ) -> io::Result<()> {
        w.open(&template.save_signature.replace("{owner}", owner.qualified()))?;
        for line in template.save_prologue {
            w.line(line)?;
        }
        for field in fields {
            let key = self.key_expr(field.name());
            let value = format!("target.{}", field.name());
            w.line(&format!("{};", field.command.storage_expr(OUT_BUNDLE, &key, &value)))?;
        }
        for line in template.save_epilogue {
            w.line(line)?;
        }

        w.close()
    }

    fn write_restore<W: Write + ?Sized>(
        &self,
        w: &mut SourceWriter<'_, W>,
        template: &LifecycleTemplate,
        owner: &ClassLayout<'_>,
        fields: &[EnrichedField],
    ) -> io::Result<()> {
        w.open(&template.restore_signature.replace("{owner}", owner.qualified()))?;

        w.open(&format!("if ({})", template.restore_guard.condition))?;
        w.line(template.restore_guard.exit)?;
        w.close()?;

        for line in template.restore_prologue {
            w.line(line)?;
        }
        for field in fields {
            let key = self.key_expr(field.name());
            w.line(&format!(
                "target.{} = {};",
                field.name(),
                field.command.retrieval_expr(IN_BUNDLE, &key)
            ))?;
        }
        for line in template.restore_epilogue {
            w.line(line)?;
        }

        w.close()
    }

    fn key_expr(&self, name: &str) -> String {
        let literal = string_literal(name);

        if self.namespace_keys {
            format!("{BASE_KEY} + {literal}")
        } else {
            literal
        }
    }
}
