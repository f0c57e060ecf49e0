use crate::app::ports::SourceWriter;

/// In-memory `SourceWriter`; each render gets its own buffer.
#[derive(Debug, Clone)]
pub struct CodeBuffer {
    lines: Vec<String>,
    unit: String,
    depth: usize,
}

impl CodeBuffer {
    pub fn new(indentation: usize) -> Self {
        Self {
            lines: Vec::new(),
            unit: " ".repeat(indentation),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Appends another buffer's lines, re-indented at the current depth.
    pub fn splice(&mut self, other: &CodeBuffer) -> &mut Self {
        for line in &other.lines {
            self.write(line);
        }
        self
    }

    pub fn into_string(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new(4)
    }
}

impl SourceWriter for CodeBuffer {
    fn write(&mut self, line: &str) -> &mut Self {
        if line.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", self.unit.repeat(self.depth), line));
        }
        self
    }

    fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    fn outdent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }
}
