//! Batch driver: validate → resolve → group → classify → emit.
//!
//! A failing field or group is reported and skipped; the batch always runs
//! to completion.


use crate::{
    diagnostic::{Diagnostic, Reporter},
    emit::CompanionEmitter,
    error::{Error, SinkError},
    hierarchy::{AssignabilityChecker, TypeGraph},
    model::{ClassGroup, EnrichedField, FieldDescriptor, TypeIdentity},
    resolve::TypeCommandResolver,
    sink::ArtifactSink,
    validate::validate_field,
};
use icicle_config_build::GeneratorConfig;
use std::collections::BTreeMap;

///
/// GenerateReport
/// per-batch tally, artifacts in emission order
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerateReport {
    pub written: Vec<String>,
    pub rejected_fields: usize,
    pub failed_groups: usize,
    pub skipped_groups: usize,
}

impl GenerateReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected_fields == 0 && self.failed_groups == 0
    }
}

///
/// Generator
///

#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    graph: &'a TypeGraph,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(config: &'a GeneratorConfig, graph: &'a TypeGraph) -> Self {
        Self { config, graph }
    }

    #[must_use]
    pub fn resolver(&self) -> TypeCommandResolver<'a> {
        TypeCommandResolver::new(
            AssignabilityChecker::new(self.graph),
            &self.config.parcelable_base,
        )
    }

    /// Run one batch. Groups are emitted in owner order; fields keep their
    /// first-discovery order inside a group.
    pub fn generate<I, S, R>(&self, fields: I, sink: &mut S, reporter: &mut R) -> GenerateReport
    where
        I: IntoIterator<Item = FieldDescriptor>,
        S: ArtifactSink + ?Sized,
        R: Reporter + ?Sized,
    {
        let mut report = GenerateReport::default();
        let groups = self.collect(fields, reporter, &mut report);

        for mut group in groups.into_values() {
            if group.is_empty() {
                tracing::debug!(owner = %group.owner(), "no valid fields, companion skipped");
                report.skipped_groups += 1;
                continue;
            }

            match self.emit_group(&mut group, sink) {
                Ok(artifact) => report.written.push(artifact),
                Err(err) => {
                    reporter.report(Diagnostic::from_error(group.owner(), &err));
                    report.failed_groups += 1;
                }
            }
        }

        report
    }

    // collect
    // a group exists once any field of its owner was seen, valid or not
    fn collect<I, R>(
        &self,
        fields: I,
        reporter: &mut R,
        report: &mut GenerateReport,
    ) -> BTreeMap<TypeIdentity, ClassGroup>
    where
        I: IntoIterator<Item = FieldDescriptor>,
        R: Reporter + ?Sized,
    {
        let resolver = self.resolver();
        let mut groups = BTreeMap::<TypeIdentity, ClassGroup>::new();

        for descriptor in fields {
            let group = groups
                .entry(descriptor.enclosing_type.clone())
                .or_insert_with_key(|owner| ClassGroup::new(owner.clone()));
            group.declare_package(descriptor.package.as_deref());

            if let Err(err) = validate_field(&descriptor) {
                reporter.report(Diagnostic::from(&err));
                report.rejected_fields += 1;
                continue;
            }

            let command = resolver.resolve(&descriptor.declared_type);
            tracing::trace!(
                owner = %descriptor.enclosing_type,
                field = %descriptor.name,
                %command,
                "field resolved"
            );

            let field = EnrichedField::new(descriptor, command);
            if !group.insert(field) {
                tracing::debug!(owner = %group.owner(), "repeated field name ignored");
            }
        }

        groups
    }

    fn emit_group<S>(&self, group: &mut ClassGroup, sink: &mut S) -> Result<String, Error>
    where
        S: ArtifactSink + ?Sized,
    {
        if !self.graph.contains(group.owner().as_str()) {
            tracing::debug!(owner = %group.owner(), "owner not in type graph");
        }
        let checker = AssignabilityChecker::new(self.graph);
        let family = group.family_with(|owner| checker.family_of(owner, &self.config.view_bases));

        let emitter = CompanionEmitter::from_config(self.config);
        let layout = group.owner().layout(group.package());
        let artifact = layout.artifact_name(emitter.suffix());
        tracing::debug!(
            owner = %group.owner(),
            %family,
            fields = group.len(),
            artifact = %artifact,
            "emitting companion"
        );

        let mut writer = sink.open(&artifact)?;
        if let Err(source) = emitter.emit(&layout, family, group.fields(), &mut writer) {
            sink.discard(&artifact, writer);
            return Err(SinkError::Write { artifact, source }.into());
        }
        sink.commit(&artifact, writer)?;

        Ok(artifact)
    }
}
