use std::io::{self, Write};

const INDENT: &str = "  ";

///
/// SourceWriter
/// line-oriented writer with brace-aware indentation
///

pub struct SourceWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
    depth: usize,
}

impl<'w, W: Write + ?Sized> SourceWriter<'w, W> {
    pub const fn new(out: &'w mut W) -> Self {
        Self { out, depth: 0 }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(INDENT.as_bytes())?;
        }
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Write `header {` and indent.
    pub fn open(&mut self, header: &str) -> io::Result<()> {
        self.line(&format!("{header} {{"))?;
        self.depth += 1;

        Ok(())
    }

    /// Dedent and write `}`.
    pub fn close(&mut self) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }
}

/// Quote `value` as a Java string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');

    out
}
