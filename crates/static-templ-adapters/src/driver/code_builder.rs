//! Code builder utility for generating properly indented code.

/// Line-oriented source builder with tab indentation.
///
/// ```
/// use static_templ_adapters::driver::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("run()")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func main() {\n\trun()\n}\n");
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
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// `header`, an indented body, then `close`.
    pub fn push_block(
        &mut self,
        header: &str,
        close: &str,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.push_line(header).push_indent();
        body(self);
        self.push_dedent().push_line(close)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
