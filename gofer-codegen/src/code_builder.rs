//! Code builder utility for generating properly indented Go code.

/// One level of Go indentation.
const INDENT: &str = "\t";

/// Fluent API for building code with tab indentation.
///
/// # Example
///
/// ```
/// use gofer_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .block_with_close("func main() {", "}", |b| b.line("run()"))
///     .build();
///
/// assert_eq!(code, "func main() {\n\trun()\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add rows as lines with every column but the last padded to a common
    /// width, the way gofmt aligns struct fields and composite literals.
    pub fn aligned<R>(self, rows: &[R]) -> Self
    where
        R: AsRef<[String]>,
    {
        let columns = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in rows {
            let row = row.as_ref();
            for (i, cell) in row.iter().enumerate().take(row.len().saturating_sub(1)) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        rows.iter().fold(self, |b, row| {
            let row = row.as_ref();
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i + 1 == row.len() {
                    line.push_str(cell);
                } else {
                    line.push_str(&format!("{:<width$} ", cell, width = widths[i]));
                }
            }
            b.line(&line)
        })
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
