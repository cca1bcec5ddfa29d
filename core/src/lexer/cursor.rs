/// Character-level reader over an owned source string.
///
/// Positions are byte offsets and always sit on a `char` boundary. Reading
/// past the end yields `None` instead of failing, and stepping back from the
/// start is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    source: String,
    pos: usize,
}

impl Cursor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
        }
    }

    /// Replace the source text and rewind to the start.
    pub fn set_source(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.pos = 0;
    }

    /// Rewind to the start without touching the source.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Peek at the current character without advancing.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek `n` characters past the current one.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Return the current character and advance past it.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Step back one character.
    pub fn push_back(&mut self) {
        if let Some(ch) = self.source[..self.pos].chars().next_back() {
            self.pos -= ch.len_utf8();
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    fn rest(&self) -> &str {
        self.source.get(self.pos..).unwrap_or_default()
    }
}
