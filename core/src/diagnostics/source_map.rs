use std::fmt;

/// 1-based line and column of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Line start table for turning token spans and error offsets into
/// human-readable positions.
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_offsets: Vec<usize>,
}

impl SourceMap {
    pub fn from_source(source: &str) -> Self {
        let mut line_offsets = vec![0];
        for (idx, ch) in source.char_indices() {
            if ch == '\n' {
                line_offsets.push(idx + 1);
            }
        }
        Self { line_offsets }
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Columns count characters, not bytes.
    pub fn byte_to_pos(&self, source: &str, byte: usize) -> SourcePos {
        let line_idx = match self.line_offsets.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_offsets.get(line_idx).copied().unwrap_or(0);
        let col = source
            .get(line_start..byte.min(source.len()))
            .map_or(0, |prefix| prefix.chars().count());
        SourcePos {
            line: line_idx + 1,
            col: col + 1,
        }
    }

    /// Text of a 1-based line without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> Option<&'s str> {
        let start = *self.line_offsets.get(line.checked_sub(1)?)?;
        let end = self
            .line_offsets
            .get(line)
            .map_or(source.len(), |next| next - 1);
        source.get(start..end)
    }
}
