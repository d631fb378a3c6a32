//! Output writer with indentation tracking
//!
//! Builds Go source text the way gofmt lays it out: one tab per indentation level.

/// Writer that tracks indentation and builds generated Go source
pub struct GoWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl Default for GoWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GoWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push('\t');
            }
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline. Blank lines never carry indentation.
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write `open`, run `body` one level deeper, then write `close` at the original level.
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(open);
        self.indent();
        body(self);
        self.dedent();
        self.writeln(close);
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}
