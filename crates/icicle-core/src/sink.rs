//! Artifact sinks.
//!
//! An artifact is opened, written, then either committed or discarded. A
//! sink must not expose a discarded or half-written artifact.

use crate::error::SinkError;
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// File extension of generated sources.
pub const SOURCE_EXTENSION: &str = "java";

const PARTIAL_EXTENSION: &str = "java.partial";

///
/// ArtifactSink
///

pub trait ArtifactSink {
    type Writer: Write;

    /// Acquire a writer for the artifact `name` (a qualified type name).
    fn open(&mut self, name: &str) -> Result<Self::Writer, SinkError>;

    /// Flush and publish a fully written artifact.
    fn commit(&mut self, name: &str, writer: Self::Writer) -> Result<(), SinkError>;

    /// Drop a partially written artifact.
    fn discard(&mut self, name: &str, writer: Self::Writer);
}

///
/// MemorySink
/// committed artifacts keyed by name
///

#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<String, String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }

    #[must_use]
    pub const fn artifacts(&self) -> &BTreeMap<String, String> {
        &self.artifacts
    }

    #[must_use]
    pub fn into_artifacts(self) -> BTreeMap<String, String> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    type Writer = Vec<u8>;

    fn open(&mut self, _name: &str) -> Result<Self::Writer, SinkError> {
        Ok(Vec::new())
    }

    fn commit(&mut self, name: &str, writer: Self::Writer) -> Result<(), SinkError> {
        let source = String::from_utf8(writer).map_err(|err| SinkError::Commit {
            artifact: name.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })?;
        self.artifacts.insert(name.to_string(), source);

        Ok(())
    }

    fn discard(&mut self, _name: &str, _writer: Self::Writer) {}
}

///
/// FsSink
///
/// Writes `<root>/<package dirs>/<Companion>.java`. Content goes to a
/// `.java.partial` sibling first and is renamed into place on commit.
///

#[derive(Clone, Debug)]
pub struct FsSink {
    root: PathBuf,
}

///
/// FsWriter
///

#[derive(Debug)]
pub struct FsWriter {
    file: BufWriter<File>,
    partial: PathBuf,
    target: PathBuf,
}

impl Write for FsWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl FsSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final path of the artifact `name`.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.with_extension(name, SOURCE_EXTENSION)
    }

    fn with_extension(&self, name: &str, extension: &str) -> PathBuf {
        let mut path = self.root.clone();
        let (package, file) = name.rsplit_once('.').map_or((None, name), |(p, f)| (Some(p), f));

        if let Some(package) = package {
            path.extend(package.split('.'));
        }
        path.push(format!("{file}.{extension}"));

        path
    }
}

impl ArtifactSink for FsSink {
    type Writer = FsWriter;

    fn open(&mut self, name: &str) -> Result<Self::Writer, SinkError> {
        let create = |source| SinkError::Create {
            artifact: name.to_string(),
            source,
        };

        let target = self.path_of(name);
        let partial = self.with_extension(name, PARTIAL_EXTENSION);
        if let Some(parent) = partial.parent() {
            fs::create_dir_all(parent).map_err(create)?;
        }
        let file = File::create(&partial).map_err(create)?;

        Ok(FsWriter {
            file: BufWriter::new(file),
            partial,
            target,
        })
    }

    fn commit(&mut self, name: &str, writer: Self::Writer) -> Result<(), SinkError> {
        let FsWriter {
            file,
            partial,
            target,
        } = writer;

        let result = file
            .into_inner()
            .map_err(io::IntoInnerError::into_error)
            .and_then(|file| file.sync_all())
            .and_then(|()| fs::rename(&partial, &target));

        if let Err(source) = result {
            remove_partial(&partial);
            return Err(SinkError::Commit {
                artifact: name.to_string(),
                source,
            });
        }

        tracing::debug!(artifact = name, path = %target.display(), "artifact committed");

        Ok(())
    }

    fn discard(&mut self, name: &str, writer: Self::Writer) {
        let FsWriter { file, partial, .. } = writer;
        drop(file);
        remove_partial(&partial);

        tracing::warn!(artifact = name, "partial artifact discarded");
    }
}

fn remove_partial(partial: &Path) {
    if let Err(err) = fs::remove_file(partial)
        && err.kind() != io::ErrorKind::NotFound
    {
        tracing::warn!(path = %partial.display(), "failed to remove partial artifact: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "com.example.Foo$$Icicle";

    #[test]
    fn memory_sink_keeps_committed_artifacts_only() {
        let mut sink = MemorySink::new();

        let mut writer = sink.open(NAME).expect("open");
        writer.write_all(b"class Foo$$Icicle {}").expect("write");
        sink.commit(NAME, writer).expect("commit");

        let mut writer = sink.open("com.example.Bar$$Icicle").expect("open");
        writer.write_all(b"class Bar").expect("write");
        sink.discard("com.example.Bar$$Icicle", writer);

        assert_eq!(sink.get(NAME), Some("class Foo$$Icicle {}"));
        assert_eq!(sink.artifacts().len(), 1);
    }

    #[test]
    fn fs_sink_lays_out_package_directories() {
        let sink = FsSink::new("/out");

        assert_eq!(
            sink.path_of(NAME),
            PathBuf::from("/out/com/example/Foo$$Icicle.java")
        );
        assert_eq!(sink.path_of("Foo$$Icicle"), PathBuf::from("/out/Foo$$Icicle.java"));
    }

    #[test]
    fn fs_sink_commit_publishes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = FsSink::new(dir.path());

        let mut writer = sink.open(NAME).expect("open");
        writer.write_all(b"package com.example;\n").expect("write");
        sink.commit(NAME, writer).expect("commit");

        let path = sink.path_of(NAME);
        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "package com.example;\n"
        );
        assert!(!path.with_extension(PARTIAL_EXTENSION).exists());
    }

    #[test]
    fn fs_sink_discard_leaves_nothing_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = FsSink::new(dir.path());

        let mut writer = sink.open(NAME).expect("open");
        writer.write_all(b"package com.ex").expect("write");
        sink.discard(NAME, writer);

        let package_dir = dir.path().join("com").join("example");
        let leftovers: Vec<_> = fs::read_dir(&package_dir)
            .expect("package dir exists")
            .collect();
        assert!(leftovers.is_empty(), "found {leftovers:?}");
    }

    #[test]
    fn fs_sink_open_fails_when_root_is_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("not-a-dir");
        fs::write(&root, b"").expect("write file");
        let mut sink = FsSink::new(&root);

        let err = sink.open(NAME).expect_err("cannot create under a file");
        assert!(matches!(err, SinkError::Create { .. }), "got {err:?}");
        assert_eq!(err.artifact(), NAME);
    }
}
